use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Relaxed,
    Excited,
    Focused,
    Adventurous,
    Curious,
    Happy,
    Nostalgic,
    Inspired,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Relaxed,
        Mood::Excited,
        Mood::Focused,
        Mood::Adventurous,
        Mood::Curious,
        Mood::Happy,
        Mood::Nostalgic,
        Mood::Inspired,
    ];

    /// Exact, case-sensitive match on the mood name.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Relaxed => "Relaxed",
            Mood::Excited => "Excited",
            Mood::Focused => "Focused",
            Mood::Adventurous => "Adventurous",
            Mood::Curious => "Curious",
            Mood::Happy => "Happy",
            Mood::Nostalgic => "Nostalgic",
            Mood::Inspired => "Inspired",
        }
    }

    pub fn keywords(&self) -> &'static str {
        match self {
            Mood::Relaxed => "calm soothing peaceful mellow gentle serene light-hearted",
            Mood::Excited => {
                "thrilling action-packed intense wild energetic fast-paced explosive"
            }
            Mood::Focused => "serious intellectual thoughtful deep cerebral complex intricate",
            Mood::Adventurous => "adventure journey explore daring bold risky expedition",
            Mood::Curious => "mystery investigation secrets unknown twist puzzle reveal",
            Mood::Happy => "funny joyful cheerful heartwarming delightful amusing uplifting",
            Mood::Nostalgic => "classic retro vintage memory emotional sentimental past",
            Mood::Inspired => {
                "motivational uplifting brave triumph perseverance heroic courageous"
            }
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
