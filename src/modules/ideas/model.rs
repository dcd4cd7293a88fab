/// Number of ideas asked of the provider and produced by the fallback.
pub const IDEA_COUNT: usize = 8;
/// Parsed ideas must be strictly longer than this many characters.
pub const MIN_IDEA_CHARS: usize = 10;
/// Parsed ideas must be strictly shorter than this many characters.
pub const MAX_IDEA_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Blog,
    Youtube,
    Tweet,
}

impl Mode {
    /// Resolves a client supplied mode. Anything unrecognised is `Blog`.
    pub fn resolve(input: &str) -> Mode {
        match input.trim().to_ascii_lowercase().as_str() {
            "youtube" => Mode::Youtube,
            "tweet" => Mode::Tweet,
            _ => Mode::Blog,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Blog => "blog",
            Mode::Youtube => "youtube",
            Mode::Tweet => "tweet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Blog => "Blog Titles",
            Mode::Youtube => "YouTube Titles",
            Mode::Tweet => "Tweet Ideas",
        }
    }
}

/// Where a list of ideas came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaSource {
    Provider,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub ideas: Vec<String>,
    pub source: IdeaSource,
}
