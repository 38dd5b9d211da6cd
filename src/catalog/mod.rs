//! Voice and language registries for the Kokoro engine.
//!
//! These tables only drive listings and display labels. Request handlers
//! pass voice and language parameters through as plain strings, so an
//! identifier outside these tables is rejected by the engine itself rather
//! than by input validation.

/// Default voice when a request omits one
pub const DEFAULT_VOICE: &str = "af_heart";

/// Default language code when a request omits one
pub const DEFAULT_LANGUAGE: &str = "a";

/// Default speed multiplier
pub const DEFAULT_SPEED: f32 = 1.0;

/// Maximum accepted input length, in characters after trimming
pub const MAX_TEXT_CHARS: usize = 5000;

/// Recommended speed range exposed by the desktop slider
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

/// Bundled Kokoro voices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KokoroVoice {
    AfHeart,
    AfBella,
    AfNicole,
    AfSarah,
    AmAdam,
    AmMichael,
    BfEmma,
    BfIsabella,
}

impl KokoroVoice {
    pub const ALL: [KokoroVoice; 8] = [
        Self::AfHeart,
        Self::AfBella,
        Self::AfNicole,
        Self::AfSarah,
        Self::AmAdam,
        Self::AmMichael,
        Self::BfEmma,
        Self::BfIsabella,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AfHeart => "af_heart",
            Self::AfBella => "af_bella",
            Self::AfNicole => "af_nicole",
            Self::AfSarah => "af_sarah",
            Self::AmAdam => "am_adam",
            Self::AmMichael => "am_michael",
            Self::BfEmma => "bf_emma",
            Self::BfIsabella => "bf_isabella",
        }
    }

    /// Display label shown in voice pickers
    pub fn label(&self) -> &'static str {
        match self {
            Self::AfHeart => "AF Heart (Default)",
            Self::AfBella => "AF Bella",
            Self::AfNicole => "AF Nicole",
            Self::AfSarah => "AF Sarah",
            Self::AmAdam => "AM Adam",
            Self::AmMichael => "AM Michael",
            Self::BfEmma => "BF Emma",
            Self::BfIsabella => "BF Isabella",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == id)
    }
}

/// Kokoro language pipelines, keyed by the engine's single-letter codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KokoroLanguage {
    AmericanEnglish,
    BritishEnglish,
    Spanish,
    French,
    Hindi,
    Italian,
    Japanese,
    BrazilianPortuguese,
    MandarinChinese,
}

impl KokoroLanguage {
    pub const ALL: [KokoroLanguage; 9] = [
        Self::AmericanEnglish,
        Self::BritishEnglish,
        Self::Spanish,
        Self::French,
        Self::Hindi,
        Self::Italian,
        Self::Japanese,
        Self::BrazilianPortuguese,
        Self::MandarinChinese,
    ];

    /// The engine's language code
    pub fn code(&self) -> &'static str {
        match self {
            Self::AmericanEnglish => "a",
            Self::BritishEnglish => "b",
            Self::Spanish => "e",
            Self::French => "f",
            Self::Hindi => "h",
            Self::Italian => "i",
            Self::Japanese => "j",
            Self::BrazilianPortuguese => "p",
            Self::MandarinChinese => "z",
        }
    }

    /// Display label shown in language pickers
    pub fn label(&self) -> &'static str {
        match self {
            Self::AmericanEnglish => "American English",
            Self::BritishEnglish => "British English",
            Self::Spanish => "Spanish (es)",
            Self::French => "French (fr-fr)",
            Self::Hindi => "Hindi (hi)",
            Self::Italian => "Italian (it)",
            Self::Japanese => "Japanese (ja)",
            Self::BrazilianPortuguese => "Brazilian Portuguese (pt-br)",
            Self::MandarinChinese => "Mandarin Chinese (zh)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

/// Label for a voice id, falling back to the raw id for unknown voices
pub fn voice_label(id: &str) -> &str {
    KokoroVoice::from_id(id).map(|v| v.label()).unwrap_or(id)
}

/// Label for a language code, falling back to the raw code
pub fn language_label(code: &str) -> &str {
    KokoroLanguage::from_code(code)
        .map(|l| l.label())
        .unwrap_or(code)
}
