//! Entrance animation presets. Each preset is a CSS class pair: the
//! hidden pose, and the settled pose once `is-visible` is added.

pub const STAGGER_BASE_MS: u32 = 50;
pub const STAGGER_STEP_MS: u32 = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    FadeInUp,
    FadeInLeft,
    ScaleIn,
}

impl Preset {
    pub fn class(self) -> &'static str {
        match self {
            Preset::FadeInUp => "reveal-fade-in-up",
            Preset::FadeInLeft => "reveal-fade-in-left",
            Preset::ScaleIn => "reveal-scale-in",
        }
    }
}

/// Delay of the `index`-th child inside a staggered group.
pub fn stagger_delay(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    STAGGER_BASE_MS.saturating_add(STAGGER_STEP_MS.saturating_mul(index))
}

pub const MOTION_CSS: &str = r#"
.reveal {
    transition: opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1),
                transform 0.6s cubic-bezier(0.22, 1, 0.36, 1);
    will-change: opacity, transform;
}
.reveal-fade-in-up { opacity: 0; transform: translateY(24px); }
.reveal-fade-in-left { opacity: 0; transform: translateX(-20px); }
.reveal-scale-in { opacity: 0; transform: scale(0.96); transition-duration: 0.5s; }
.reveal.is-visible { opacity: 1; transform: none; }
.accent-line {
    height: 2px;
    width: 0;
    background: rgba(var(--primary-rgb), 0.4);
    transition: width 0.7s cubic-bezier(0.22, 1, 0.36, 1) 0.3s;
}
.is-visible .accent-line { width: 48px; }
@keyframes blink { 50% { opacity: 0; } }
.cursor-blink::after { content: '_'; animation: blink 1s step-end infinite; }
@keyframes pulse { 50% { opacity: 0.4; } }
.pulse { animation: pulse 2s ease-in-out infinite; }
@keyframes float { 50% { transform: translateY(-6px); } }
.float { animation: float 3s ease-in-out infinite; }
@media (prefers-reduced-motion: reduce) {
    .reveal, .reveal.is-visible { transition: none; opacity: 1; transform: none; }
    .float, .pulse, .cursor-blink::after { animation: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0), 50);
        assert_eq!(stagger_delay(1), 130);
        assert_eq!(stagger_delay(4), 370);
        assert_eq!(stagger_delay(usize::MAX), u32::MAX);
    }

    #[test]
    fn every_preset_has_css() {
        for preset in [Preset::FadeInUp, Preset::FadeInLeft, Preset::ScaleIn] {
            assert!(MOTION_CSS.contains(&format!(".{}", preset.class())));
        }
    }
}
