//! Canned assistant reply generation
//!
//! The reply stub stands in for a real assistant backend: it embeds the
//! prompt verbatim in a fixed template and appends one tip drawn uniformly
//! at random from a small fixed set. The random source is owned by the stub
//! and seedable so tests can pin the output.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Closing tips appended to every fabricated reply
pub const TIPS: [&str; 4] = [
    "Break the problem into small, testable steps.",
    "Keep your constraints visible while planning.",
    "Validate assumptions with quick experiments.",
    "Summarize key outcomes before taking action.",
];

/// Generator for plausible-looking assistant replies
pub struct ReplyStub {
    rng: StdRng,
}

impl ReplyStub {
    /// Create a stub seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a stub with a fixed seed for deterministic output
    ///
    /// # Examples
    ///
    /// ```
    /// use parley::reply::ReplyStub;
    ///
    /// let mut a = ReplyStub::with_seed(7);
    /// let mut b = ReplyStub::with_seed(7);
    /// assert_eq!(a.generate("same prompt"), b.generate("same prompt"));
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a reply for the given prompt
    ///
    /// The prompt is trimmed and quoted back verbatim, followed by three
    /// generic steps and one random tip. Pure apart from the single random
    /// draw for the tip line.
    pub fn generate(&mut self, prompt: &str) -> String {
        let cleaned = prompt.trim();
        let tip = TIPS[self.rng.random_range(0..TIPS.len())];

        format!(
            "You asked: \"{}\"\n\
             \n\
             Here is a practical response to get you moving:\n\
             1. Clarify your goal and output format for this request.\n\
             2. Draft an outline or approach before diving deep.\n\
             3. Iterate quickly and improve based on feedback.\n\
             \n\
             Extra tip: {}",
            cleaned, tip
        )
    }
}

impl Default for ReplyStub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_echoes_prompt_verbatim() {
        let mut stub = ReplyStub::with_seed(1);
        let reply = stub.generate("How do I sort a Vec?");
        assert!(reply.contains("You asked: \"How do I sort a Vec?\""));
    }

    #[test]
    fn test_generate_trims_prompt_before_echo() {
        let mut stub = ReplyStub::with_seed(1);
        let reply = stub.generate("  padded prompt  ");
        assert!(reply.contains("You asked: \"padded prompt\""));
    }

    #[test]
    fn test_generate_has_fixed_structure() {
        let mut stub = ReplyStub::with_seed(2);
        let reply = stub.generate("anything");
        let lines: Vec<&str> = reply.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Here is a practical response to get you moving:");
        assert!(lines[3].starts_with("1. "));
        assert!(lines[4].starts_with("2. "));
        assert!(lines[5].starts_with("3. "));
        assert_eq!(lines[6], "");
        assert!(lines[7].starts_with("Extra tip: "));
    }

    #[test]
    fn test_generate_tip_comes_from_fixed_set() {
        let mut stub = ReplyStub::new();
        for _ in 0..32 {
            let reply = stub.generate("prompt");
            let tip_line = reply.lines().last().expect("empty reply");
            let tip = tip_line.strip_prefix("Extra tip: ").expect("no tip line");
            assert!(TIPS.contains(&tip), "unexpected tip: {}", tip);
        }
    }

    #[test]
    fn test_seeded_stub_is_deterministic() {
        let mut a = ReplyStub::with_seed(42);
        let mut b = ReplyStub::with_seed(42);
        for _ in 0..8 {
            assert_eq!(a.generate("p"), b.generate("p"));
        }
    }
}
