//! Common constants used throughout droidstamp.

/// Supported project configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["droidstamp.json", "droidstamp.yml", "droidstamp.yaml"];

/// Android module source root used when neither the CLI nor the config names one
pub const DEFAULT_SOURCE_SET: &str = "app/src/main";

/// Extension marking a file as a template body
pub const TEMPLATE_EXTENSION: &str = "j2";

/// Component suffixes stripped from feature names, longest first
pub const COMPONENT_SUFFIXES: [&str; 4] = ["DialogFragment", "ViewModel", "Fragment", "Activity"];

/// Kotlin hard keywords, which can never be used as a package segment
pub const KOTLIN_HARD_KEYWORDS: [&str; 28] = [
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];
