//! Loading interval files, merge settings and stdin text.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::json;
use tracing::debug;

use abacus_interval::{Interval, MergeConfig};

/// Read a JSON array of intervals.
pub fn load_intervals(path: &Path) -> anyhow::Result<Vec<Interval>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let intervals: Vec<Interval> = serde_json::from_str(&text)
        .with_context(|| format!("parsing intervals from {}", path.display()))?;
    debug!(path = %path.display(), count = intervals.len(), "loaded intervals");
    Ok(intervals)
}

/// Read merge settings from TOML. Missing keys take their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<MergeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: MergeConfig = toml::from_str(&text)
        .with_context(|| format!("parsing merge config {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded merge config");
    Ok(config)
}

/// Read all of stdin.
pub fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

/// The bundled sample collections.
pub fn demo_intervals() -> (Vec<Interval>, Vec<Interval>) {
    let first = vec![
        Interval::new(2.0, 6.0, vec![json!(1), json!(2)]),
        Interval::new(10.0, 14.0, vec![json!(5)]),
    ];
    let second = vec![
        Interval::new(3.0, 5.0, vec![json!(3)]),
        Interval::new(12.0, 16.0, vec![json!(6)]),
        Interval::new(20.0, 22.0, vec![json!(7)]),
    ];
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use abacus_interval::Validation;

    #[test]
    fn load_intervals_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"positions": [2, 6], "values": [1, 2]}},
                {{"positions": [10, 14], "values": ["x"]}}]"#
        )
        .unwrap();

        let intervals = load_intervals(file.path()).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].positions, (2.0, 6.0));
        assert_eq!(intervals[1].values, vec![json!("x")]);
    }

    #[test]
    fn load_intervals_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"positions": [2]}}]"#).unwrap();
        let err = load_intervals(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing intervals"));
    }

    #[test]
    fn load_intervals_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_intervals(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().starts_with("reading"));
    }

    #[test]
    fn load_config_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "validation = \"strict\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.validation, Validation::Strict);
        assert_eq!(config.threshold, 0.5);
    }

    #[test]
    fn load_config_rejects_unknown_variant() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "validation = \"sometimes\"").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn demo_has_five_intervals() {
        let (first, second) = demo_intervals();
        assert_eq!(first.len() + second.len(), 5);
    }
}
