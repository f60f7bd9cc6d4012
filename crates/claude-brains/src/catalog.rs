use serde::Serialize;

/// USD per million tokens. Data only; nothing here does cost arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenRates {
    pub input: f64,
    pub output: f64,
    pub cache_write: f64,
    pub cache_read: f64,
}

/// Capability and pricing metadata for one model slug
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSpec {
    /// Slug callers ask for, e.g. `claude/sonnet`
    pub slug: &'static str,
    /// Id sent to the Messages API
    pub model_id: &'static str,
    pub description: &'static str,
    pub context_window: u32,
    pub max_output_tokens: u32,
    pub supports_vision: bool,
    pub rates: TokenRates,
}

const HAIKU_3_5: ModelSpec = ModelSpec {
    slug: "claude/haiku/v3.5",
    model_id: "claude-3-5-haiku-20241022",
    description: "fastest and cheapest; good for classification and short extraction",
    context_window: 200_000,
    max_output_tokens: 8_192,
    supports_vision: true,
    rates: TokenRates {
        input: 0.80,
        output: 4.00,
        cache_write: 1.00,
        cache_read: 0.08,
    },
};

const SONNET_3_7: ModelSpec = ModelSpec {
    slug: "claude/sonnet/v3.7",
    model_id: "claude-3-7-sonnet-20250219",
    description: "balanced reasoning with extended thinking",
    context_window: 200_000,
    max_output_tokens: 64_000,
    supports_vision: true,
    rates: TokenRates {
        input: 3.00,
        output: 15.00,
        cache_write: 3.75,
        cache_read: 0.30,
    },
};

const SONNET_4: ModelSpec = ModelSpec {
    slug: "claude/sonnet/v4",
    model_id: "claude-sonnet-4-20250514",
    description: "balanced speed and intelligence; the default for most work",
    context_window: 200_000,
    max_output_tokens: 64_000,
    supports_vision: true,
    rates: TokenRates {
        input: 3.00,
        output: 15.00,
        cache_write: 3.75,
        cache_read: 0.30,
    },
};

const OPUS_4: ModelSpec = ModelSpec {
    slug: "claude/opus/v4",
    model_id: "claude-opus-4-20250514",
    description: "most capable; for complex reasoning and long agentic work",
    context_window: 200_000,
    max_output_tokens: 32_000,
    supports_vision: true,
    rates: TokenRates {
        input: 15.00,
        output: 75.00,
        cache_write: 18.75,
        cache_read: 1.50,
    },
};

static MODELS: [ModelSpec; 4] = [HAIKU_3_5, SONNET_3_7, SONNET_4, OPUS_4];

/// Unversioned slugs resolve to the latest version of the family
static ALIASES: [(&str, &str); 3] = [
    ("claude/haiku", "claude/haiku/v3.5"),
    ("claude/sonnet", "claude/sonnet/v4"),
    ("claude/opus", "claude/opus/v4"),
];

/// Static table of the Anthropic models this crate can drive
pub struct ModelCatalog;

impl ModelCatalog {
    pub fn lookup(slug: &str) -> Option<&'static ModelSpec> {
        let slug = ALIASES
            .iter()
            .find(|(alias, _)| *alias == slug)
            .map(|(_, target)| *target)
            .unwrap_or(slug);
        MODELS.iter().find(|m| m.slug == slug)
    }

    pub fn all() -> &'static [ModelSpec] {
        &MODELS
    }
}
