//! Dashboard - the chart-and-favorites coordinator.
//!
//! Three independent request lifecycles (history fetch, favorites load,
//! favorite add/remove) each write a disjoint piece of view state, so
//! their responses may resolve in any order. A history response is
//! discarded when the selection changed while it was in flight.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use shared::catalog::{self, CAC40, DEFAULT_TICKER};
use shared::dto::market::{Favorite, RangeCode};
use shared::history::{build_series, HistoryPoint};
use shared::{favorites as favorites_util, messages, ApiError};

use crate::components::PriceChart;
use crate::services::{auth, favorites, market};
use crate::state::session::use_session_context;
use crate::utils::constants::{
    AUTH_REDIRECT_DELAY_MS, ERROR_CLEAR_DELAY_MS, STATUS_RESET_DELAY_MS,
};

/// Lifecycle of the most recent add-favorite attempt.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AddStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let (ticker, set_ticker) = signal(DEFAULT_TICKER.to_string());
    let (range, set_range) = signal(RangeCode::OneMonth);
    let (series, set_series) = signal(Vec::<HistoryPoint>::new());
    let (history_error, set_history_error) = signal(None::<String>);
    let (favorites_items, set_favorites) = signal(Vec::<Favorite>::new());
    let (favorites_message, set_favorites_message) = signal(None::<String>);
    let (add_status, set_add_status) = signal(AddStatus::Idle);
    let (show_confirm, set_show_confirm) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (account_message, set_account_message) = signal(None::<String>);

    // History fetch: on mount and whenever ticker or range changes. The
    // response is applied only if the captured selection still matches
    // current state, so a stale response never overwrites a newer one.
    Effect::new(move |_| {
        let requested_ticker = ticker.get();
        let requested_range = range.get();
        leptos::task::spawn_local(async move {
            let result = market::fetch_history(&requested_ticker, requested_range).await;
            if ticker.get_untracked() != requested_ticker
                || range.get_untracked() != requested_range
            {
                return;
            }
            match result {
                Ok(payload) => match build_series(&payload) {
                    Ok(points) => {
                        set_history_error.set(None);
                        set_series.set(points);
                    }
                    Err(_) => {
                        set_series.set(Vec::new());
                        set_history_error
                            .set(Some(messages::incomplete_data(&requested_ticker)));
                    }
                },
                // A 200 whose body failed to parse is a data error, not an
                // HTTP one; report it the same way as a truncated payload.
                Err(ApiError::Malformed) => {
                    set_series.set(Vec::new());
                    set_history_error.set(Some(messages::incomplete_data(&requested_ticker)));
                }
                Err(ApiError::Unauthorized) => {
                    set_series.set(Vec::new());
                    set_history_error.set(Some(messages::HISTORY_UNAUTHORIZED.to_string()));
                }
                Err(err) => {
                    log::warn!("history fetch failed: {err:?}");
                    set_series.set(Vec::new());
                    set_history_error.set(Some(messages::HISTORY_FETCH_ERROR.to_string()));
                }
            }
        });
    });

    // Favorites load: on mount and after every successful add.
    let load_favorites = move || {
        let Some(token) = session.token() else {
            set_favorites_message.set(Some(messages::FAVORITES_NOT_CONNECTED.to_string()));
            return;
        };
        leptos::task::spawn_local(async move {
            match favorites::list(&token).await {
                Ok(list) => {
                    set_favorites.set(list);
                    set_favorites_message.set(None);
                }
                Err(err) => {
                    log::warn!("favorites load failed: {err:?}");
                    let text = err
                        .backend_message()
                        .unwrap_or(messages::GENERIC_ERROR)
                        .to_string();
                    set_favorites_message.set(Some(text));
                }
            }
        });
    };
    load_favorites();

    let add_navigate = navigate.clone();
    let add_favorite = move |_| {
        let Some(token) = session.token() else {
            set_favorites_message.set(Some(messages::FAVORITE_ADD_LOGIN_REQUIRED.to_string()));
            return;
        };
        let symbol = ticker.get_untracked();
        set_add_status.set(AddStatus::Loading);
        let navigate = add_navigate.clone();
        leptos::task::spawn_local(async move {
            match favorites::add(&token, &symbol).await {
                Ok(()) => {
                    // Optimistic append, reconciled by the reload below.
                    set_favorites.update(|list| {
                        favorites_util::push_unique(
                            list,
                            Favorite {
                                ticker: symbol.clone(),
                                name: catalog::display_name(&symbol).to_string(),
                            },
                        );
                    });
                    set_add_status.set(AddStatus::Success);
                    set_favorites_message.set(Some(messages::FAVORITE_ADDED.to_string()));
                    load_favorites();
                    TimeoutFuture::new(STATUS_RESET_DELAY_MS).await;
                    if add_status.get_untracked() == AddStatus::Success {
                        set_add_status.set(AddStatus::Idle);
                        set_favorites_message.set(None);
                    }
                }
                Err(err) => {
                    let failure = messages::favorite_add_failure(&err);
                    set_add_status.set(AddStatus::Error);
                    set_favorites_message.set(Some(failure.message));
                    if failure.invalidates_session {
                        session.clear();
                        TimeoutFuture::new(AUTH_REDIRECT_DELAY_MS).await;
                        navigate("/login", Default::default());
                    } else {
                        TimeoutFuture::new(ERROR_CLEAR_DELAY_MS).await;
                        if add_status.get_untracked() == AddStatus::Error {
                            set_favorites_message.set(None);
                        }
                    }
                }
            }
        });
    };

    let remove_favorite = move |symbol: String| {
        let Some(token) = session.token() else {
            set_favorites_message.set(Some(messages::FAVORITES_NOT_CONNECTED.to_string()));
            return;
        };
        leptos::task::spawn_local(async move {
            match favorites::remove(&token, &symbol).await {
                Ok(()) => {
                    set_favorites.update(|list| favorites_util::remove_ticker(list, &symbol));
                }
                Err(err) => {
                    log::warn!("favorite remove failed: {err:?}");
                    let text = err
                        .backend_message()
                        .unwrap_or(messages::GENERIC_ERROR)
                        .to_string();
                    set_favorites_message.set(Some(text));
                }
            }
        });
    };

    let delete_navigate = navigate.clone();
    let confirm_delete = move |_| {
        let Some(token) = session.token() else {
            set_account_message.set(Some(messages::DELETE_NOT_CONNECTED.to_string()));
            set_show_confirm.set(false);
            return;
        };
        set_deleting.set(true);
        let navigate = delete_navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::delete_account(&token).await {
                Ok(()) => {
                    session.clear();
                    session.set_notice(messages::ACCOUNT_DELETED.to_string());
                    navigate("/login", Default::default());
                }
                Err(err) => {
                    log::warn!("account deletion failed: {err:?}");
                    let failure = messages::delete_failure(&err);
                    set_account_message.set(Some(failure.message));
                    set_deleting.set(false);
                    set_show_confirm.set(false);
                    if failure.force_logout {
                        session.clear();
                        TimeoutFuture::new(AUTH_REDIRECT_DELAY_MS).await;
                        navigate("/login", Default::default());
                    }
                }
            }
        });
    };

    view! {
        <div class="page dashboard">
            <section class="chart-section">
                <div class="selectors">
                    <select
                        class="ticker-select"
                        prop:value=ticker
                        on:change=move |ev| set_ticker.set(event_target_value(&ev))
                    >
                        {CAC40
                            .iter()
                            .map(|&(symbol, name)| {
                                view! {
                                    <option value=symbol>{format!("{name} ({symbol})")}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <div class="range-buttons">
                        {RangeCode::ALL
                            .iter()
                            .copied()
                            .map(|code| {
                                view! {
                                    <button
                                        class="range-button"
                                        class:active=move || range.get() == code
                                        on:click=move |_| set_range.set(code)
                                    >
                                        {code.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <h2>{move || {
                    let symbol = ticker.get();
                    format!("{} ({symbol})", catalog::display_name(&symbol))
                }}</h2>

                {move || history_error.get().map(|text| view! { <p class="error-message">{text}</p> })}
                <PriceChart series=series/>

                <button
                    class="btn add-favorite"
                    on:click=add_favorite
                    disabled=move || add_status.get() == AddStatus::Loading
                >
                    {move || match add_status.get() {
                        AddStatus::Loading => "Ajout…",
                        AddStatus::Success => "Ajouté ✓",
                        _ => "Ajouter aux favoris",
                    }}
                </button>
            </section>

            <section class="favorites-section">
                <h3>"Mes favoris"</h3>
                {move || favorites_message.get().map(|text| view! { <p class="info-message">{text}</p> })}
                {move || {
                    let items = favorites_items.get();
                    if items.is_empty() {
                        view! { <p class="favorites-empty">"Aucun favori pour l'instant."</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="favorites-list">
                                {items
                                    .into_iter()
                                    .map(|favorite| {
                                        let select_symbol = favorite.ticker.clone();
                                        let remove_symbol = favorite.ticker.clone();
                                        view! {
                                            <li>
                                                <button
                                                    class="favorite-name"
                                                    on:click=move |_| set_ticker.set(select_symbol.clone())
                                                >
                                                    {favorite.name.clone()}
                                                </button>
                                                <button
                                                    class="favorite-remove"
                                                    on:click=move |_| remove_favorite(remove_symbol.clone())
                                                >
                                                    "Retirer"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="account-section">
                {move || account_message.get().map(|text| view! { <p class="error-message">{text}</p> })}
                <button class="btn-danger" on:click=move |_| set_show_confirm.set(true)>
                    "Supprimer mon compte"
                </button>
                {move || {
                    show_confirm.get().then(|| {
                        let confirm = confirm_delete.clone();
                        view! {
                            <div class="modal-overlay">
                                <div class="modal">
                                    <p>
                                        "Supprimer définitivement votre compte ? Cette action est irréversible."
                                    </p>
                                    <button class="btn-danger" on:click=confirm disabled=deleting>
                                        {move || if deleting.get() { "Suppression…" } else { "Supprimer" }}
                                    </button>
                                    <button
                                        on:click=move |_| set_show_confirm.set(false)
                                        disabled=deleting
                                    >
                                        "Annuler"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }}
            </section>
        </div>
    }
}
