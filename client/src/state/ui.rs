//! Local UI chrome state (theme, settings, navigation, panel, layout).
//!
//! DESIGN
//! ======
//! Everything the page widgets used to discover by querying the document
//! lives here instead: the notification panel's existence, the theme flag,
//! and which nav item is highlighted. Widgets read and write it through a
//! `RwSignal<UiState>` provided by the root component.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::layout::LayoutMode;

/// UI state for theme, settings toggles, navigation, and the notification panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub settings: Settings,
    pub active_nav: NavSection,
    pub layout: LayoutMode,
    /// At most one panel exists; `None` means it is not in the document.
    pub notification_panel: Option<NotificationPanel>,
}

impl UiState {
    pub fn dark_mode(&self) -> bool {
        self.settings.get(SettingId::DarkMode)
    }

    /// Open the notification panel, building it if absent.
    ///
    /// Returns `true` when a new panel was created. An already-open panel is
    /// kept and its entrance animation restarted.
    pub fn open_notification_panel(&mut self) -> bool {
        match self.notification_panel.as_mut() {
            Some(panel) => {
                panel.entered = false;
                false
            }
            None => {
                self.notification_panel = Some(NotificationPanel::new());
                true
            }
        }
    }

    /// Remove the notification panel. Returns `true` if one was open.
    pub fn close_notification_panel(&mut self) -> bool {
        self.notification_panel.take().is_some()
    }

    /// Mark the open panel as having finished its entrance transition.
    pub fn settle_notification_panel(&mut self) {
        if let Some(panel) = self.notification_panel.as_mut() {
            panel.entered = true;
        }
    }
}

/// Identifier attached to each toggle control when it is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingId {
    DarkMode,
    Notifications,
    WorkoutReminders,
    AutoSync,
}

impl SettingId {
    pub const ALL: [SettingId; 4] = [
        SettingId::DarkMode,
        SettingId::Notifications,
        SettingId::WorkoutReminders,
        SettingId::AutoSync,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingId::DarkMode => "Dark Mode",
            SettingId::Notifications => "Notification",
            SettingId::WorkoutReminders => "Workout Reminders",
            SettingId::AutoSync => "Auto Sync",
        }
    }
}

/// Boolean state of every settings toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    dark_mode: bool,
    notifications: bool,
    workout_reminders: bool,
    auto_sync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            workout_reminders: true,
            auto_sync: false,
        }
    }
}

impl Settings {
    pub fn get(&self, id: SettingId) -> bool {
        match id {
            SettingId::DarkMode => self.dark_mode,
            SettingId::Notifications => self.notifications,
            SettingId::WorkoutReminders => self.workout_reminders,
            SettingId::AutoSync => self.auto_sync,
        }
    }

    pub fn set(&mut self, id: SettingId, enabled: bool) {
        let slot = match id {
            SettingId::DarkMode => &mut self.dark_mode,
            SettingId::Notifications => &mut self.notifications,
            SettingId::WorkoutReminders => &mut self.workout_reminders,
            SettingId::AutoSync => &mut self.auto_sync,
        };
        *slot = enabled;
    }
}

/// Sidebar navigation targets. Each maps to an in-page anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavSection {
    #[default]
    Dashboard,
    Workouts,
    Progress,
    Nutrition,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Dashboard,
        NavSection::Workouts,
        NavSection::Progress,
        NavSection::Nutrition,
        NavSection::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Workouts => "Workouts",
            NavSection::Progress => "Progress",
            NavSection::Nutrition => "Nutrition",
            NavSection::Settings => "Settings",
        }
    }

    /// Element id of the section this link scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            NavSection::Dashboard => "overview",
            NavSection::Workouts => "workouts",
            NavSection::Progress => "progress",
            NavSection::Nutrition => "nutrition",
            NavSection::Settings => "settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavSection::Dashboard => "fa-home",
            NavSection::Workouts => "fa-dumbbell",
            NavSection::Progress => "fa-chart-line",
            NavSection::Nutrition => "fa-apple-alt",
            NavSection::Settings => "fa-cog",
        }
    }
}

/// The notification dropdown. Rebuilt from scratch every time it opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationPanel {
    pub items: Vec<NotificationItem>,
    /// Whether the entrance transition has been released.
    pub entered: bool,
}

impl NotificationPanel {
    fn new() -> Self {
        Self { items: sample_notifications(), entered: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub time: &'static str,
}

fn sample_notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            icon: "fa-dumbbell",
            title: "Workout Reminder",
            body: "Time for your evening workout session",
            time: "5 min ago",
        },
        NotificationItem {
            icon: "fa-trophy",
            title: "Goal Achieved!",
            body: "You've completed your weekly fitness goal",
            time: "1 hour ago",
        },
        NotificationItem {
            icon: "fa-apple-alt",
            title: "Meal Plan Updated",
            body: "Your nutrition plan has been updated",
            time: "2 hours ago",
        },
    ]
}
