use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::Zone;
use crate::error::{PoiError, PoiResult};

/// Parse bulk-import text into validated zones.
///
/// All-or-nothing: any syntax error, a non-array top level or a single
/// invalid zone fails the whole import with `MalformedImport`.
pub fn parse_zones(text: &str) -> PoiResult<Vec<Zone>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| PoiError::MalformedImport(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(PoiError::MalformedImport(
            "expected an array of POI objects".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let zone: Zone = serde_json::from_value(item)
                .map_err(|e| PoiError::MalformedImport(format!("entry {}: {}", i, e)))?;
            zone.validate()
                .map_err(|e| PoiError::MalformedImport(format!("entry {}: {}", i, e)))?;
            Ok(zone)
        })
        .collect()
}

/// Pretty JSON array, the same shape `parse_zones` accepts
pub fn dump_zones(zones: &[Zone]) -> PoiResult<String> {
    Ok(serde_json::to_string_pretty(zones)?)
}

/// Startup helper for `--zones <FILE>`
pub fn load_zones_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).context(format!("Failed to read POI file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_zones;
    use crate::domain::{Side, Timeframe};

    #[test]
    fn test_parse_minimal_zone() {
        let text = r#"[{"timeframe":"4h","side":"sell","start":1815,"end":1818.5,"label":"R"}]"#;
        let zones = parse_zones(text).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].timeframe, Timeframe::H4);
        assert_eq!(zones[0].side, Side::Sell);
        assert_eq!(zones[0].end, 1818.5);
        assert_eq!(zones[0].strength, None);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_zones("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_array_and_bad_syntax() {
        for text in ["{}", "42", "\"zones\"", "[{", ""] {
            assert!(
                matches!(parse_zones(text), Err(PoiError::MalformedImport(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_rejects_unknown_enum_and_invalid_zone() {
        let bad_tf = r#"[{"timeframe":"2h","side":"buy","start":1,"end":2,"label":"x"}]"#;
        assert!(matches!(parse_zones(bad_tf), Err(PoiError::MalformedImport(_))));

        let bad_side = r#"[{"timeframe":"1h","side":"long","start":1,"end":2,"label":"x"}]"#;
        assert!(parse_zones(bad_side).is_err());

        let reversed = r#"[{"timeframe":"1h","side":"buy","start":3,"end":2,"label":"x"}]"#;
        match parse_zones(reversed) {
            Err(PoiError::MalformedImport(msg)) => assert!(msg.contains("entry 0")),
            other => panic!("expected MalformedImport, got {:?}", other),
        }

        let missing_label = r#"[{"timeframe":"1h","side":"buy","start":1,"end":2}]"#;
        assert!(parse_zones(missing_label).is_err());
    }

    #[test]
    fn test_dump_then_parse_is_identity() {
        let zones = default_zones();
        let text = dump_zones(&zones).unwrap();
        assert_eq!(parse_zones(&text).unwrap(), zones);
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_zones_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read POI file"));
    }
}
