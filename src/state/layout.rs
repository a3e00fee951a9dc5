use crate::model::Project;

/// Visual measurements of a sprite at a given level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteMetrics {
    pub size: f64,
    pub glow_opacity: f64,
    /// level / max_level, in `0.0..=1.0`.
    pub level_fraction: f64,
}

pub fn sprite_size(base_size: f64, size_factor: f64, level: u32) -> f64 {
    base_size * (1.0 + level as f64 * size_factor)
}

impl SpriteMetrics {
    pub fn compute(base_size: f64, size_factor: f64, level: u32, max_level: u32) -> Self {
        let level_fraction = if max_level == 0 {
            0.0
        } else {
            (level as f64 / max_level as f64).min(1.0)
        };
        Self {
            size: sprite_size(base_size, size_factor, level),
            glow_opacity: (0.2 + level as f64 * 0.15).min(1.0),
            level_fraction,
        }
    }
}

/// What the detail modal shows on the right-hand side of the growth preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LevelPreview {
    Next { level: u32, size: f64 },
    MaxLevel,
}

pub fn level_preview(project: &Project, base_size: f64, size_factor: f64) -> LevelPreview {
    if project.is_max_level() {
        return LevelPreview::MaxLevel;
    }
    let level = (project.level + 1).min(project.max_level);
    LevelPreview::Next {
        level,
        size: sprite_size(base_size, size_factor, level),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PreviewVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Hidden => "Show Growth",
            Self::Shown => "Hide Growth",
        }
    }
}

pub const BUBBLE_COUNT: usize = 15;

/// One ambient bubble; all values are fixed for the component's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub size_px: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// `rng` yields uniform samples in `[0, 1)`.
pub fn generate_bubbles(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Bubble> {
    (0..count)
        .map(|_| Bubble {
            size_px: rng() * 20.0 + 10.0,
            left_pct: rng() * 100.0,
            duration_s: rng() * 10.0 + 10.0,
            delay_s: rng() * 15.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_projects;

    #[test]
    fn sprite_grows_with_level() {
        let m = SpriteMetrics::compute(60.0, 0.15, 2, 5);
        assert!((m.size - 78.0).abs() < 1e-9);
        assert!((m.glow_opacity - 0.5).abs() < 1e-9);
        assert!((m.level_fraction - 0.4).abs() < 1e-9);
    }

    #[test]
    fn glow_is_capped() {
        let m = SpriteMetrics::compute(60.0, 0.15, 9, 9);
        assert_eq!(m.glow_opacity, 1.0);
        assert_eq!(m.level_fraction, 1.0);
    }

    #[test]
    fn zero_max_level_has_empty_bar() {
        assert_eq!(SpriteMetrics::compute(60.0, 0.15, 0, 0).level_fraction, 0.0);
    }

    #[test]
    fn preview_shows_next_level() {
        let cetus = sample_projects().remove(2);
        match level_preview(&cetus, 80.0, 0.15) {
            LevelPreview::Next { level, size } => {
                assert_eq!(level, 5);
                assert!((size - 140.0).abs() < 1e-9);
            }
            LevelPreview::MaxLevel => panic!("cetus is level 4"),
        }
    }

    #[test]
    fn max_level_is_terminal() {
        let mut p = sample_projects().remove(0);
        p.level = p.max_level;
        assert_eq!(level_preview(&p, 80.0, 0.15), LevelPreview::MaxLevel);
    }

    #[test]
    fn toggling_twice_hides_again() {
        let start = PreviewVisibility::default();
        assert!(!start.is_shown());
        assert!(start.toggled().is_shown());
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn bubbles_stay_in_range() {
        let mut samples = [0.0, 0.5, 0.999].into_iter().cycle();
        let bubbles = generate_bubbles(BUBBLE_COUNT, || samples.next().unwrap_or(0.0));
        assert_eq!(bubbles.len(), BUBBLE_COUNT);
        for b in bubbles {
            assert!((10.0..30.0).contains(&b.size_px));
            assert!((0.0..100.0).contains(&b.left_pct));
            assert!((10.0..20.0).contains(&b.duration_s));
            assert!((0.0..15.0).contains(&b.delay_s));
        }
    }
}
