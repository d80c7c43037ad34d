//! User-facing message strings and the per-flow failure mapping.
//!
//! Centralized so every flow consumes the same classification and so the
//! exact strings can be asserted in tests. The mixed French/English wording
//! matches the rest of the product.

use crate::outcome::ApiError;
use std::collections::BTreeMap;

pub const NETWORK_ERROR: &str = "La connexion a échoué. Vérifiez votre réseau.";
pub const SERVER_ERROR: &str = "Une erreur serveur est survenue.";

// Login
pub const LOGIN_INVALID_CREDENTIALS: &str = "Identifiant ou mot de passe incorrect.";
pub const GOOGLE_TOKEN_MISSING: &str = "Erreur : Token ID Google non reçu.";
pub const GOOGLE_LOGIN_FAILED: &str = "La connexion via Google a échoué.";

// Registration
pub const REGISTER_FIX_FIELDS: &str = "Please fix the errors below.";
pub const REGISTER_GENERIC: &str =
    "Registration failed. Please check the details below or try again.";
pub const REGISTER_CONFLICT_FALLBACK: &str = "Username or email already exists.";
pub const REGISTER_NETWORK: &str = "Could not connect to the server. Please try again later.";

// Dashboard
pub const FAVORITES_NOT_CONNECTED: &str = "Connectez-vous pour voir vos favoris.";
pub const FAVORITE_ADD_LOGIN_REQUIRED: &str = "Connectez-vous pour ajouter un favori.";
pub const FAVORITE_ADDED: &str = "Favori ajouté !";
pub const FAVORITES_UNAVAILABLE: &str = "La fonctionnalité favoris est indisponible.";
pub const SESSION_EXPIRED: &str = "Session expirée. Veuillez vous reconnecter.";
pub const HISTORY_UNAUTHORIZED: &str = "Non autorisé à consulter l'historique.";
pub const HISTORY_FETCH_ERROR: &str = "Impossible de récupérer l'historique.";
pub const GENERIC_ERROR: &str = "Une erreur est survenue.";

// Account deletion
pub const DELETE_NOT_CONNECTED: &str = "Vous n'êtes pas connecté.";
pub const DELETE_UNAVAILABLE: &str = "La suppression de compte est indisponible.";
pub const DELETE_FORBIDDEN: &str = "Action non autorisée. Déconnexion…";
pub const ACCOUNT_DELETED: &str = "Votre compte a été supprimé.";

// Email sender
pub const EMAIL_SEND_ERROR: &str = "Erreur lors de l'envoi de l'email.";

pub fn incomplete_data(ticker: &str) -> String {
    format!("Données incomplètes pour {ticker}.")
}

/// Login failure → banner text.
pub fn login_error(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => LOGIN_INVALID_CREDENTIALS.to_string(),
        ApiError::Network => NETWORK_ERROR.to_string(),
        other => other
            .backend_message()
            .unwrap_or(SERVER_ERROR)
            .to_string(),
    }
}

/// Google-exchange failure → banner text.
pub fn google_error(error: &ApiError) -> String {
    match error {
        ApiError::Network => GOOGLE_LOGIN_FAILED.to_string(),
        other => format!(
            "Échec connexion Google : {}",
            other.backend_message().unwrap_or("Erreur serveur")
        ),
    }
}

/// Registration failure, split into a banner and per-field errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFailure {
    pub banner: String,
    pub field_errors: BTreeMap<String, String>,
}

pub fn register_failure(error: &ApiError) -> RegisterFailure {
    let (banner, field_errors) = match error {
        ApiError::Validation(fields) => (REGISTER_FIX_FIELDS.to_string(), fields.clone()),
        ApiError::Conflict(message) => (
            message
                .clone()
                .unwrap_or_else(|| REGISTER_CONFLICT_FALLBACK.to_string()),
            BTreeMap::new(),
        ),
        ApiError::Network => (REGISTER_NETWORK.to_string(), BTreeMap::new()),
        other => (
            other
                .backend_message()
                .unwrap_or(REGISTER_GENERIC)
                .to_string(),
            BTreeMap::new(),
        ),
    };
    RegisterFailure {
        banner,
        field_errors,
    }
}

/// What the dashboard must do after a failed favorite add.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteAddFailure {
    pub message: String,
    /// 401/403: drop the token and schedule the login redirect instead of
    /// auto-clearing the message.
    pub invalidates_session: bool,
}

pub fn favorite_add_failure(error: &ApiError) -> FavoriteAddFailure {
    match error {
        ApiError::Unauthorized | ApiError::Forbidden => FavoriteAddFailure {
            message: SESSION_EXPIRED.to_string(),
            invalidates_session: true,
        },
        ApiError::NotFound => FavoriteAddFailure {
            message: FAVORITES_UNAVAILABLE.to_string(),
            invalidates_session: false,
        },
        ApiError::Network => FavoriteAddFailure {
            message: NETWORK_ERROR.to_string(),
            invalidates_session: false,
        },
        other => FavoriteAddFailure {
            message: other.backend_message().unwrap_or(GENERIC_ERROR).to_string(),
            invalidates_session: false,
        },
    }
}

/// Account-deletion failure → message plus forced-logout flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFailure {
    pub message: String,
    pub force_logout: bool,
}

pub fn delete_failure(error: &ApiError) -> DeleteFailure {
    match error {
        ApiError::NotFound => DeleteFailure {
            message: DELETE_UNAVAILABLE.to_string(),
            force_logout: false,
        },
        ApiError::Forbidden => DeleteFailure {
            message: DELETE_FORBIDDEN.to_string(),
            force_logout: true,
        },
        ApiError::Unauthorized => DeleteFailure {
            message: SESSION_EXPIRED.to_string(),
            force_logout: true,
        },
        ApiError::Network => DeleteFailure {
            message: NETWORK_ERROR.to_string(),
            force_logout: false,
        },
        other => DeleteFailure {
            message: other.backend_message().unwrap_or(GENERIC_ERROR).to_string(),
            force_logout: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_credentials_show_the_exact_message() {
        assert_eq!(
            login_error(&ApiError::Unauthorized),
            "Identifiant ou mot de passe incorrect."
        );
    }

    #[test]
    fn login_surfaces_backend_text_then_generic() {
        assert_eq!(
            login_error(&ApiError::Server(Some("Maintenance en cours".to_string()))),
            "Maintenance en cours"
        );
        assert_eq!(login_error(&ApiError::Server(None)), SERVER_ERROR);
        assert_eq!(login_error(&ApiError::Network), NETWORK_ERROR);
    }

    #[test]
    fn register_validation_distributes_field_errors() {
        let mut fields = BTreeMap::new();
        fields.insert("username".to_string(), "Déjà pris".to_string());
        let failure = register_failure(&ApiError::Validation(fields.clone()));
        assert_eq!(failure.banner, REGISTER_FIX_FIELDS);
        assert_eq!(failure.field_errors, fields);
    }

    #[test]
    fn register_conflict_prefers_backend_text() {
        let failure = register_failure(&ApiError::Conflict(Some("Email déjà utilisé".into())));
        assert_eq!(failure.banner, "Email déjà utilisé");
        let failure = register_failure(&ApiError::Conflict(None));
        assert_eq!(failure.banner, REGISTER_CONFLICT_FALLBACK);
    }

    #[test]
    fn forbidden_add_invalidates_the_session() {
        let failure = favorite_add_failure(&ApiError::Forbidden);
        assert!(failure.invalidates_session);
        assert_eq!(failure.message, SESSION_EXPIRED);
    }

    #[test]
    fn missing_favorites_endpoint_is_reported_unavailable() {
        let failure = favorite_add_failure(&ApiError::NotFound);
        assert!(!failure.invalidates_session);
        assert_eq!(failure.message, FAVORITES_UNAVAILABLE);
    }

    #[test]
    fn delete_statuses_drive_forced_logout() {
        assert!(delete_failure(&ApiError::Unauthorized).force_logout);
        assert!(delete_failure(&ApiError::Forbidden).force_logout);
        assert!(!delete_failure(&ApiError::NotFound).force_logout);
        assert!(!delete_failure(&ApiError::Server(None)).force_logout);
    }
}
