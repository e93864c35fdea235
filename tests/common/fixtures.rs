//! Catalog fixtures and an isolated `offerdash` command for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use offerdash::test_utils::TestDir;

/// Environment variables that change the binary's behavior. Every test
/// command clears them.
const OFFERDASH_ENV: &[&str] = &[
    "OFFERDASH_FORMAT",
    "OFFERDASH_AMOUNTS",
    "OFFERDASH_NO_COLOR",
    "OFFERDASH_PRETTY",
    "OFFERDASH_OFFERS_FILE",
    "OFFERDASH_CONFIG",
    "OFFERDASH_LOG",
    "OFFERDASH_LOG_FORMAT",
    "OFFERDASH_LOG_FILE",
    "RUST_LOG",
];

/// Catalog in the shape the dashboard persists, legacy quirks included:
/// numeric ids, string prices and units, a `Month YYYY` month, a cancelled
/// offer and an unscheduled offer whose final price exceeds its price.
///
/// Expected figures (compact):
/// - July 2025: Monsoon Glow Facial (₹2.40L Mumbai + ₹3.60L Bengaluru) and
///   Bridal Consultation (text price), ₹6L projected
/// - June 2025: HydraFacial, ₹80K projected
/// - Unscheduled: Odd Pricing, ₹6K projected, one warning
/// - Total: 4 active offers, ₹6.86L projected
pub const DASHBOARD_CATALOG: &str = r#"[
  {
    "id": 1721900000000,
    "title": "Monsoon Glow Facial",
    "category": "Skin",
    "month": "2025-07",
    "priceMumbai": 14595,
    "finalPriceMumbai": 11999,
    "targetUnitsMumbai": "20",
    "priceBengaluru": 18638,
    "finalPriceBengaluru": "11999",
    "targetUnitsBengaluru": 30
  },
  {
    "id": "hydra-1",
    "title": "HydraFacial",
    "month": "June 2025",
    "priceMumbai": 8000,
    "targetUnits": 10
  },
  {
    "id": "bridal",
    "title": "Bridal Consultation",
    "month": "2025-07",
    "pricing": "Starting ₹999"
  },
  {
    "id": "peel",
    "title": "Peel Week",
    "month": "2025-07",
    "isCancelled": true,
    "priceMumbai": 5000,
    "targetUnitsMumbai": 10
  },
  {
    "id": "odd",
    "title": "Odd Pricing",
    "priceBengaluru": 1000,
    "finalPriceBengaluru": 1200,
    "targetUnitsBengaluru": 5
  }
]"#;

/// Same catalog wrapped in an `{"offers": [...]}` object.
#[must_use]
pub fn wrapped_catalog() -> String {
    format!(r#"{{"offers": {DASHBOARD_CATALOG}}}"#)
}

/// A temp workspace with an empty config file, so the user's real config
/// and data directories are never read.
pub struct Workspace {
    pub dir: TestDir,
    pub config: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TestDir::new();
        let config = dir.create_file("config.toml", "");
        Self { dir, config }
    }

    /// Workspace whose config file holds `toml`.
    pub fn with_config(toml: &str) -> Self {
        let dir = TestDir::new();
        let config = dir.create_file("config.toml", toml);
        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the dashboard catalog and return its path.
    pub fn catalog(&self) -> PathBuf {
        self.dir.create_file("offers.json", DASHBOARD_CATALOG)
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        self.dir.create_file(name, content)
    }

    /// `offerdash` with a scrubbed environment pointed at this workspace.
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("offerdash").expect("offerdash binary");
        for key in OFFERDASH_ENV {
            cmd.env_remove(key);
        }
        cmd.env("OFFERDASH_CONFIG", &self.config)
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("XDG_DATA_HOME", self.path().join("data"))
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse stdout as a JSON document.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}):\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}
