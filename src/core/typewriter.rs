//! Character-by-character text reveal that cycles through phrases
//!
//! [`Typewriter`] is an endless iterator of [`Step`]s: each step says how long
//! to wait and what text to show afterwards. The UI scheduler drives it.

use std::time::Duration;

use super::sequence::Step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing: Duration,
    pub deleting: Duration,
    /// Hold time once a phrase is fully typed
    pub pause: Duration,
    /// Gap between deleting one phrase and typing the next
    pub switch: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(80),
            deleting: Duration::from_millis(40),
            pause: Duration::from_millis(1800),
            switch: Duration::from_millis(400),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    phrase_idx: usize,
    char_idx: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing<S: AsRef<str>>(phrases: &[S], timing: TypewriterTiming) -> Self {
        Self {
            phrases: phrases
                .iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            timing,
            phrase_idx: 0,
            char_idx: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_idx
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Text currently on screen
    pub fn displayed(&self) -> String {
        self.phrases
            .get(self.phrase_idx)
            .map(|p| p[..self.char_idx].iter().collect())
            .unwrap_or_default()
    }
}

impl Iterator for Typewriter {
    type Item = Step<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.phrases.get(self.phrase_idx)?.len();

        let delay = match (self.deleting, self.char_idx) {
            (false, idx) if idx < len => {
                self.char_idx += 1;
                self.timing.typing
            }
            (false, _) => {
                self.deleting = true;
                self.timing.pause
            }
            (true, idx) if idx > 0 => {
                self.char_idx -= 1;
                self.timing.deleting
            }
            (true, _) => {
                self.deleting = false;
                self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
                self.timing.switch
            }
        };

        Some(Step::new(delay, self.displayed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tw: &mut Typewriter, n: usize) -> Vec<String> {
        tw.by_ref().take(n).map(|s| s.action).collect()
    }

    #[test]
    fn test_types_then_pauses_then_deletes() {
        let mut tw = Typewriter::new(&["ab", "c"]);

        let steps: Vec<_> = tw.by_ref().take(7).collect();
        let shown: Vec<_> = steps.iter().map(|s| s.action.as_str()).collect();
        let delays: Vec<_> = steps.iter().map(|s| s.delay.as_millis()).collect();

        assert_eq!(shown, vec!["a", "ab", "ab", "a", "", "", "c"]);
        assert_eq!(delays, vec![80, 80, 1800, 40, 40, 400, 80]);
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn test_cycles_back_to_first_phrase() {
        let mut tw = Typewriter::new(&["x", "y"]);
        // x: type, pause, delete, switch; y: type, pause, delete, switch
        let _ = texts(&mut tw, 8);
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(texts(&mut tw, 1), vec!["x"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new(&["né✦"]);
        assert_eq!(texts(&mut tw, 3), vec!["n", "né", "né✦"]);
    }

    #[test]
    fn test_no_phrases_yields_nothing() {
        let mut tw = Typewriter::new::<&str>(&[]);
        assert!(tw.next().is_none());
        assert_eq!(tw.displayed(), "");
    }

    #[test]
    fn test_empty_phrase_never_spins() {
        let mut tw = Typewriter::new(&[""]);
        let delays: Vec<_> = tw.by_ref().take(4).map(|s| s.delay.as_millis()).collect();
        assert!(delays.iter().all(|d| *d > 0));
    }
}
