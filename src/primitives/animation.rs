//! Entrance - one-shot CSS animation played when a mark appears
//!
//! The core never drives the animation. A mark's presence in the newest
//! snapshot is the only signal; the class below does the rest in CSS.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Entrance {
    #[default]
    FadeIn,
}

impl Entrance {
    /// Class name applied to the mark's outer element
    pub fn class(&self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
        }
    }

    /// `@keyframes` and class rules - inject once as a <style> block
    pub fn keyframes_css() -> &'static str {
        r#"
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
.fade-in { animation: fade-in 1s ease-in forwards; }
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_is_default() {
        assert_eq!(Entrance::default(), Entrance::FadeIn);
        assert_eq!(Entrance::FadeIn.class(), "fade-in");
    }

    #[test]
    fn keyframes_define_the_class() {
        let css = Entrance::keyframes_css();
        assert!(css.contains("@keyframes fade-in"));
        assert!(css.contains(".fade-in"));
    }
}
