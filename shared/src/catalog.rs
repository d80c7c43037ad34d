//! Fixed catalog of selectable equities (CAC40 constituents).

/// `(ticker, display name)` pairs offered by the dashboard selector.
pub const CAC40: &[(&str, &str)] = &[
    ("AC.PA", "Accor"),
    ("AI.PA", "Air Liquide"),
    ("AIR.PA", "Airbus"),
    ("MT.AS", "ArcelorMittal"),
    ("CS.PA", "AXA"),
    ("BNP.PA", "BNP Paribas"),
    ("EN.PA", "Bouygues"),
    ("BVI.PA", "Bureau Veritas"),
    ("CAP.PA", "Capgemini"),
    ("CA.PA", "Carrefour"),
    ("ACA.PA", "Crédit Agricole"),
    ("BN.PA", "Danone"),
    ("DSY.PA", "Dassault Systèmes"),
    ("EDEN.PA", "Edenred"),
    ("ENGI.PA", "Engie"),
    ("EL.PA", "EssilorLuxottica"),
    ("ERF.PA", "Eurofins Scientific"),
    ("RMS.PA", "Hermès"),
    ("KER.PA", "Kering"),
    ("OR.PA", "L'Oréal"),
    ("LR.PA", "Legrand"),
    ("MC.PA", "LVMH"),
    ("ML.PA", "Michelin"),
    ("ORA.PA", "Orange"),
    ("RI.PA", "Pernod Ricard"),
    ("PUB.PA", "Publicis"),
    ("RNO.PA", "Renault"),
    ("SAF.PA", "Safran"),
    ("SGO.PA", "Saint-Gobain"),
    ("SAN.PA", "Sanofi"),
    ("SU.PA", "Schneider Electric"),
    ("GLE.PA", "Société Générale"),
    ("STLAP.PA", "Stellantis"),
    ("STMPA.PA", "STMicroelectronics"),
    ("TEP.PA", "Teleperformance"),
    ("HO.PA", "Thales"),
    ("TTE.PA", "TotalEnergies"),
    ("URW.PA", "Unibail-Rodamco-Westfield"),
    ("VIE.PA", "Veolia"),
    ("DG.PA", "Vinci"),
];

/// Ticker shown when the dashboard mounts.
pub const DEFAULT_TICKER: &str = "AIR.PA";

/// Resolve a ticker's display name locally; falls back to the symbol for
/// tickers outside the catalog (e.g. favorites saved from another device).
pub fn display_name(ticker: &str) -> &str {
    CAC40
        .iter()
        .find(|(symbol, _)| *symbol == ticker)
        .map(|(_, name)| *name)
        .unwrap_or(ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tickers_resolve_to_names() {
        assert_eq!(display_name("AIR.PA"), "Airbus");
        assert_eq!(display_name("MC.PA"), "LVMH");
    }

    #[test]
    fn unknown_ticker_falls_back_to_symbol() {
        assert_eq!(display_name("ZZZZ"), "ZZZZ");
    }

    #[test]
    fn default_ticker_is_in_the_catalog() {
        assert!(CAC40.iter().any(|(symbol, _)| *symbol == DEFAULT_TICKER));
    }

    #[test]
    fn catalog_has_no_duplicate_symbols() {
        let mut symbols: Vec<&str> = CAC40.iter().map(|(symbol, _)| *symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), CAC40.len());
    }
}
