//! Core data models for the aquarium.
//! Projects own exactly one theme animal; the garden reducer owns the list of
//! projects and replaces it wholesale on every change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

/// Pixel offset inside the aquarium surface's local coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeAnimal {
    /// Stable key, unique across the garden.
    pub id: String,
    pub name: String,
    /// Logo shown on the sprite, the cards and the detail modal.
    pub image: String,
    /// Alternate art; not every animal ships both.
    pub icon: Option<String>,
    pub icon_alt: Option<String>,
    pub position: Position,
    pub level: u32,
    pub max_level: u32,
}

impl ThemeAnimal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        position: Position,
        level: u32,
        max_level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            icon: None,
            icon_alt: None,
            position,
            level: level.min(max_level),
            max_level,
        }
    }

    pub fn with_icons(mut self, icon: impl Into<String>, icon_alt: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.icon_alt = Some(icon_alt.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub theme_animal: ThemeAnimal,
    pub target_transactions: u64,
    pub current_transactions: u64,
    /// CSS color token (`#RRGGBB`) used for badges, glows and bars.
    pub accent_color: String,
}

impl Project {
    /// Completion percentage, derived from the transaction counters.
    /// Always within `0..=100`; a zero target reads as no progress.
    pub fn progress(&self) -> u32 {
        if self.target_transactions == 0 {
            return 0;
        }
        let ratio = self.current_transactions as f64 / self.target_transactions as f64;
        (ratio * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn is_completed(&self) -> bool {
        self.progress() >= 100
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    level: u32,
    current: u64,
    accent: &'static str,
    animal_id: &'static str,
    logo: &'static str,
    icons: (&'static str, &'static str),
    at: (f64, f64),
}

const MAX_LEVEL: u32 = 5;
const TARGET_TRANSACTIONS: u64 = 100;

const SEEDS: [Seed; 5] = [
    Seed {
        id: "1",
        name: "Bluefin",
        level: 2,
        current: 65,
        accent: "#4ECDC4",
        animal_id: "bluefin",
        logo: "/logos/bluefin.webp",
        icons: ("/animals/blufin1.png", "/animals/blufin2.png"),
        at: (50.0, 50.0),
    },
    Seed {
        id: "2",
        name: "Walrus",
        level: 1,
        current: 30,
        accent: "#FF6B6B",
        animal_id: "walrus",
        logo: "/logos/walrus.png",
        icons: ("/animals/walrus2.png", "/animals/walrus1.png"),
        at: (300.0, 100.0),
    },
    Seed {
        id: "3",
        name: "Cetus",
        level: 4,
        current: 90,
        accent: "#9D8DF1",
        animal_id: "cetus",
        logo: "/logos/cetus.webp",
        icons: ("/animals/cetus1.png", "/animals/cetus2.webp"),
        at: (450.0, 50.0),
    },
    Seed {
        id: "4",
        name: "Haedal",
        level: 2,
        current: 45,
        accent: "#F9C80E",
        animal_id: "haedal",
        logo: "/logos/haedal.webp",
        icons: ("/animals/haedal1.png", "/animals/haedal2.jpeg"),
        at: (600.0, 150.0),
    },
    Seed {
        id: "5",
        name: "Scallop",
        level: 1,
        current: 10,
        accent: "#F86624",
        animal_id: "scallop",
        logo: "/logos/scallop.webp",
        icons: ("/animals/scallop1.png", "/animals/scallop2.png"),
        at: (150.0, 200.0),
    },
];

/// The static project set the garden starts from on every load.
pub fn sample_projects() -> Vec<Project> {
    SEEDS
        .iter()
        .map(|s| Project {
            id: s.id.to_string(),
            name: s.name.to_string(),
            level: s.level.min(MAX_LEVEL),
            max_level: MAX_LEVEL,
            theme_animal: ThemeAnimal::new(
                s.animal_id,
                s.name,
                s.logo,
                Position::new(s.at.0, s.at.1),
                s.level,
                MAX_LEVEL,
            )
            .with_icons(s.icons.0, s.icons.1),
            target_transactions: TARGET_TRANSACTIONS,
            current_transactions: s.current,
            accent_color: s.accent.to_string(),
        })
        .collect()
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenState {
    pub projects: Vec<Project>,
    /// Moves waiting for an explicit save, keyed by animal id.
    pub pending: HashMap<String, Position>,
    /// Project whose detail modal is open.
    pub selected: Option<String>,
}

#[derive(Clone, Debug)]
pub enum GardenAction {
    /// Commit a move straight into `projects`.
    MoveAnimal { animal_id: String, position: Position },
    /// Stage a move; later stages of the same animal overwrite earlier ones.
    StageMove { animal_id: String, position: Position },
    CommitPending,
    Select { project_id: String },
    CloseDetail,
}

impl GardenState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    fn has_animal(&self, animal_id: &str) -> bool {
        self.projects.iter().any(|p| p.theme_animal.id == animal_id)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects as they should be drawn: staged moves override committed positions.
    pub fn display_projects(&self) -> Vec<Project> {
        self.projects
            .iter()
            .map(|p| match self.pending.get(&p.theme_animal.id) {
                Some(pos) => with_animal_position(p, *pos),
                None => p.clone(),
            })
            .collect()
    }
}

fn with_animal_position(project: &Project, position: Position) -> Project {
    Project {
        theme_animal: ThemeAnimal {
            position,
            ..project.theme_animal.clone()
        },
        ..project.clone()
    }
}

impl Reducible for GardenState {
    type Action = GardenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GardenAction::*;
        match action {
            MoveAnimal { animal_id, position } => {
                if !self.has_animal(&animal_id) {
                    return self;
                }
                let mut new = (*self).clone();
                new.projects = self
                    .projects
                    .iter()
                    .map(|p| {
                        if p.theme_animal.id == animal_id {
                            with_animal_position(p, position)
                        } else {
                            p.clone()
                        }
                    })
                    .collect();
                Rc::new(new)
            }
            StageMove { animal_id, position } => {
                if !self.has_animal(&animal_id) {
                    return self;
                }
                let mut new = (*self).clone();
                new.pending.insert(animal_id, position);
                Rc::new(new)
            }
            CommitPending => {
                if self.pending.is_empty() {
                    return self;
                }
                let mut new = (*self).clone();
                new.projects = self.display_projects();
                new.pending.clear();
                Rc::new(new)
            }
            Select { project_id } => {
                if !self.projects.iter().any(|p| p.id == project_id) {
                    return self;
                }
                let mut new = (*self).clone();
                new.selected = Some(project_id);
                Rc::new(new)
            }
            CloseDetail => {
                if self.selected.is_none() {
                    return self;
                }
                let mut new = (*self).clone();
                new.selected = None;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garden() -> Rc<GardenState> {
        Rc::new(GardenState::new(sample_projects()))
    }

    fn animal_pos(state: &GardenState, animal_id: &str) -> Position {
        state
            .projects
            .iter()
            .find(|p| p.theme_animal.id == animal_id)
            .map(|p| p.theme_animal.position)
            .unwrap()
    }

    #[test]
    fn progress_is_derived_from_transactions() {
        let projects = sample_projects();
        let progress: Vec<u32> = projects.iter().map(Project::progress).collect();
        assert_eq!(progress, vec![65, 30, 90, 45, 10]);
    }

    #[test]
    fn progress_rounds_and_saturates() {
        let mut p = sample_projects().remove(0);
        p.target_transactions = 3;
        p.current_transactions = 2;
        assert_eq!(p.progress(), 67);
        p.current_transactions = 9;
        assert_eq!(p.progress(), 100);
        assert!(p.is_completed());
        p.target_transactions = 0;
        assert_eq!(p.progress(), 0);
    }

    #[test]
    fn animal_level_never_exceeds_max() {
        let a = ThemeAnimal::new("x", "X", "/x.png", Position::default(), 9, 5);
        assert_eq!(a.level, 5);
    }

    #[test]
    fn move_replaces_only_the_matching_animal() {
        let before = garden();
        let after = before.clone().reduce(GardenAction::MoveAnimal {
            animal_id: "walrus".into(),
            position: Position::new(10.0, 20.0),
        });
        assert_eq!(animal_pos(&after, "walrus"), Position::new(10.0, 20.0));
        assert_eq!(animal_pos(&after, "cetus"), animal_pos(&before, "cetus"));
        // copy-on-write: the previous snapshot is untouched
        assert_eq!(animal_pos(&before, "walrus"), Position::new(300.0, 100.0));
    }

    #[test]
    fn second_move_wins() {
        let state = garden()
            .reduce(GardenAction::MoveAnimal {
                animal_id: "cetus".into(),
                position: Position::new(100.0, 100.0),
            })
            .reduce(GardenAction::MoveAnimal {
                animal_id: "cetus".into(),
                position: Position::new(5.0, 7.0),
            });
        assert_eq!(animal_pos(&state, "cetus"), Position::new(5.0, 7.0));
    }

    #[test]
    fn unknown_animal_is_ignored() {
        let before = garden();
        let after = before.clone().reduce(GardenAction::MoveAnimal {
            animal_id: "kraken".into(),
            position: Position::new(1.0, 1.0),
        });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn staged_moves_show_but_only_commit_on_save() {
        let staged = garden()
            .reduce(GardenAction::StageMove {
                animal_id: "haedal".into(),
                position: Position::new(1.0, 2.0),
            })
            .reduce(GardenAction::StageMove {
                animal_id: "haedal".into(),
                position: Position::new(3.0, 4.0),
            });
        assert!(staged.has_pending());
        assert_eq!(animal_pos(&staged, "haedal"), Position::new(600.0, 150.0));
        let shown = staged
            .display_projects()
            .into_iter()
            .find(|p| p.theme_animal.id == "haedal")
            .unwrap();
        assert_eq!(shown.theme_animal.position, Position::new(3.0, 4.0));

        let saved = staged.reduce(GardenAction::CommitPending);
        assert!(!saved.has_pending());
        assert_eq!(animal_pos(&saved, "haedal"), Position::new(3.0, 4.0));
    }

    #[test]
    fn select_then_close_clears_selection() {
        let selected = garden().reduce(GardenAction::Select {
            project_id: "3".into(),
        });
        assert_eq!(selected.selected_project().map(|p| p.name.as_str()), Some("Cetus"));
        let closed = selected.reduce(GardenAction::CloseDetail);
        assert!(closed.selected.is_none());
        assert!(closed.selected_project().is_none());
    }
}
