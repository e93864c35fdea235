//! Test utilities for offerdash.
//!
//! Offer factories and a temp-dir helper shared by unit and integration tests.
//!
//! ```rust,ignore
//! use offerdash::test_utils::*;
//!
//! let dir = TestDir::new();
//! let path = dir.write_catalog(&[discounted_offer(), text_priced_offer()]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Offer;

// =============================================================================
// Offer Factories
// =============================================================================

/// Mumbai-only offer with a discount: 14595 → 11999, 20 units, July 2025.
#[must_use]
pub fn discounted_offer() -> Offer {
    Offer {
        id: "mum-1".to_string(),
        title: "Monsoon Glow Facial".to_string(),
        description: Some("Hydrating facial with complimentary head massage".to_string()),
        month: Some("2025-07".to_string()),
        category: Some("Skin".to_string()),
        price_mumbai: Some(14595.0),
        final_price_mumbai: Some(11999.0),
        target_units_mumbai: Some(20),
        ..Offer::default()
    }
}

/// Bengaluru-only offer, June 2025: 8000 → 6400, 15 units.
#[must_use]
pub fn bengaluru_only_offer() -> Offer {
    Offer {
        id: "blr-1".to_string(),
        title: "Laser Hair Reduction - Full Arms".to_string(),
        month: Some("2025-06".to_string()),
        category: Some("Laser".to_string()),
        price_bengaluru: Some(8000.0),
        final_price_bengaluru: Some(6400.0),
        target_units_bengaluru: Some(15),
        ..Offer::default()
    }
}

/// Offer without location prices, only free text, July 2025.
#[must_use]
pub fn text_priced_offer() -> Offer {
    Offer {
        id: "txt-1".to_string(),
        title: "Bridal Consultation".to_string(),
        month: Some("2025-07".to_string()),
        pricing: Some("Starting ₹999".to_string()),
        ..Offer::default()
    }
}

/// Cancelled Mumbai offer, July 2025: 5000, 10 units.
#[must_use]
pub fn cancelled_offer() -> Offer {
    Offer {
        id: "cxl-1".to_string(),
        title: "Peel Week".to_string(),
        month: Some("2025-07".to_string()),
        is_cancelled: true,
        price_mumbai: Some(5000.0),
        target_units_mumbai: Some(10),
        ..Offer::default()
    }
}

/// All factory offers.
#[must_use]
pub fn sample_catalog() -> Vec<Offer> {
    vec![
        discounted_offer(),
        bengaluru_only_offer(),
        text_priced_offer(),
        cancelled_offer(),
    ]
}

// =============================================================================
// Temp Directories
// =============================================================================

/// Temporary directory removed on drop.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    /// Create a fresh temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the directory.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write test file");
        path
    }

    /// Write `offers` as a JSON catalog named `offers.json`.
    ///
    /// # Panics
    ///
    /// Panics if serialization or writing fails.
    pub fn write_catalog(&self, offers: &[Offer]) -> PathBuf {
        let json = serde_json::to_string_pretty(offers).expect("failed to serialize offers");
        self.create_file("offers.json", &json)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert that a string contains a substring, printing the haystack on failure.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack: &str = $haystack;
        let needle: &str = $needle;
        assert!(
            haystack.contains(needle),
            "Expected output to contain {:?}\n\nActual output:\n{}",
            needle,
            haystack
        );
    };
}

/// Assert that a string does NOT contain a substring.
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack: &str = $haystack;
        let needle: &str = $needle;
        assert!(
            !haystack.contains(needle),
            "Expected output NOT to contain {:?}\n\nActual output:\n{}",
            needle,
            haystack
        );
    };
}

/// Assert that a string parses as JSON.
#[macro_export]
macro_rules! assert_json_valid {
    ($json:expr) => {
        let json: &str = $json;
        if let Err(e) = serde_json::from_str::<serde_json::Value>(json) {
            panic!("Expected valid JSON, parse failed: {e}\n\nJSON:\n{json}");
        }
    };
}

/// Assert that a string carries no ANSI escape sequences.
#[macro_export]
macro_rules! assert_no_ansi {
    ($text:expr) => {
        let text: &str = $text;
        assert!(
            !text.contains("\x1b["),
            "Expected no ANSI escape codes.\n\nActual output:\n{:?}",
            text
        );
    };
}
