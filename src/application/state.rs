//! Application state for the admin dashboard.
//!
//! This module holds the per-page view state (record collections, open
//! dialogs, search queries, selections) and the mode machine that decides
//! how key presses are interpreted.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::domain::stats::StatsPeriod;
use crate::domain::{
    seed, Collection, Filtered, FormStateController, Notification, NotificationCenter, Notifier,
    Plan, PlanForm, Record, RecordId, Submission, User, UserForm, UserStatus,
};

use super::navigation::Page;

/// Represents the current mode of the application.
///
/// The mode determines how user input is interpreted and which overlays
/// are drawn on top of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Page navigation and list shortcuts
    Normal,
    /// Typing a query into the users search box
    Search,
    /// Add-user dialog is open
    AddUser,
    /// New-plan dialog is open
    AddPlan,
    /// Help overlay is displayed
    Help,
}

/// View state of the users page.
#[derive(Debug)]
pub struct UsersPage {
    pub users: Collection<User>,
    pub form: FormStateController<UserForm>,
    /// Live search box contents
    pub search_query: String,
    /// Row selected within the filtered table
    pub selected: usize,
}

impl Default for UsersPage {
    fn default() -> Self {
        Self {
            users: Collection::new(seed::users()),
            form: FormStateController::default(),
            search_query: String::new(),
            selected: 0,
        }
    }
}

impl UsersPage {
    pub fn visible(&self) -> Filtered<'_, User> {
        self.users.filter(&self.search_query)
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.visible().nth(self.selected)
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().count();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

/// View state of the plans page.
#[derive(Debug)]
pub struct PlansPage {
    pub plans: Collection<Plan>,
    pub form: FormStateController<PlanForm>,
    pub selected: usize,
}

impl Default for PlansPage {
    fn default() -> Self {
        Self {
            plans: Collection::new(seed::plans()),
            form: FormStateController::default(),
            selected: 0,
        }
    }
}

impl PlansPage {
    pub fn selected_plan(&self) -> Option<&Plan> {
        self.plans.records().get(self.selected)
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.plans.len().saturating_sub(1));
    }
}

/// Main application state.
///
/// Each page owns its own controllers, built fresh from seed data when the
/// `App` is constructed. Nothing is shared across pages.
///
/// # Examples
///
/// ```
/// use streamly_admin::application::{App, AppMode, Page};
///
/// let app = App::default();
/// assert_eq!(app.page, Page::Dashboard);
/// assert_eq!(app.mode, AppMode::Normal);
/// assert_eq!(app.users.users.len(), 5);
/// ```
#[derive(Debug)]
pub struct App {
    /// Page currently shown
    pub page: Page,
    /// Current application mode
    pub mode: AppMode,
    pub users: UsersPage,
    pub plans: PlansPage,
    /// Reporting window on the statistics page
    pub stats_period: StatsPeriod,
    /// Live toasts
    pub notifications: NotificationCenter,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Cursor position within the search box
    pub cursor_position: usize,
    /// Directory exports are written to
    pub export_dir: PathBuf,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Page::Dashboard, Duration::from_secs(4), PathBuf::from("."))
    }
}

impl App {
    pub fn new(start_page: Page, notification_ttl: Duration, export_dir: PathBuf) -> Self {
        Self {
            page: start_page,
            mode: AppMode::Normal,
            users: UsersPage::default(),
            plans: PlansPage::default(),
            stats_period: StatsPeriod::default(),
            notifications: NotificationCenter::new(notification_ttl),
            help_scroll: 0,
            cursor_position: 0,
            export_dir,
        }
    }

    /// Expires old toasts. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.notify(notification);
    }

    /// Switches to `page`, leaving any open dialog or search.
    pub fn go_to(&mut self, page: Page) {
        if page != self.page {
            tracing::debug!(from = %self.page, to = %page, "navigate");
        }
        self.cancel_dialog();
        if self.mode == AppMode::Search {
            self.finish_search();
        }
        self.mode = AppMode::Normal;
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.go_to(self.page.next());
    }

    pub fn previous_page(&mut self) {
        self.go_to(self.page.previous());
    }

    pub fn toggle_help(&mut self) {
        self.mode = if self.mode == AppMode::Help {
            AppMode::Normal
        } else {
            self.help_scroll = 0;
            AppMode::Help
        };
    }

    /// Moves the list selection on the current page down one row.
    pub fn select_next(&mut self) {
        match self.page {
            Page::Users => {
                let count = self.users.visible().count();
                if self.users.selected + 1 < count {
                    self.users.selected += 1;
                }
            }
            Page::Plans => {
                if self.plans.selected + 1 < self.plans.plans.len() {
                    self.plans.selected += 1;
                }
            }
            _ => {}
        }
    }

    /// Moves the list selection on the current page up one row.
    pub fn select_previous(&mut self) {
        match self.page {
            Page::Users => self.users.selected = self.users.selected.saturating_sub(1),
            Page::Plans => self.plans.selected = self.plans.selected.saturating_sub(1),
            _ => {}
        }
    }

    /// Starts search mode on the users page, keeping the current query.
    pub fn start_search(&mut self) {
        if self.page != Page::Users {
            return;
        }
        self.mode = AppMode::Search;
        self.cursor_position = self.users.search_query.len();
    }

    pub fn insert_search_char(&mut self, c: char) {
        self.users.search_query.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.users.selected = 0;
    }

    pub fn delete_search_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let previous = self.users.search_query[..self.cursor_position]
            .chars()
            .next_back()
            .map(char::len_utf8)
            .unwrap_or(1);
        self.cursor_position -= previous;
        self.users.search_query.remove(self.cursor_position);
        self.users.selected = 0;
    }

    /// Leaves search mode and keeps the table filtered.
    pub fn finish_search(&mut self) {
        self.mode = AppMode::Normal;
        self.cursor_position = 0;
        self.users.clamp_selection();
    }

    /// Leaves search mode and shows every user again.
    pub fn cancel_search(&mut self) {
        self.mode = AppMode::Normal;
        self.users.search_query.clear();
        self.cursor_position = 0;
        self.users.clamp_selection();
    }

    /// Opens the create dialog for the current page.
    pub fn open_add_dialog(&mut self) {
        match self.page {
            Page::Users => {
                self.users.form.open();
                self.mode = AppMode::AddUser;
            }
            Page::Plans => {
                self.plans.form.open();
                self.mode = AppMode::AddPlan;
            }
            _ => {}
        }
    }

    /// Closes whichever dialog is open, discarding its draft.
    pub fn cancel_dialog(&mut self) {
        self.users.form.cancel();
        self.plans.form.cancel();
        if matches!(self.mode, AppMode::AddUser | AppMode::AddPlan) {
            self.mode = AppMode::Normal;
        }
    }

    /// Submits the open dialog into its collection.
    ///
    /// Validation errors keep the dialog open and raise an error toast.
    /// Coerced numeric fields still produce a record, followed by a second
    /// toast naming the fields.
    pub fn submit_dialog(&mut self) {
        match self.mode {
            AppMode::AddUser => match self.users.form.submit() {
                Ok(submission) => {
                    let coerced = submission.coerced.clone();
                    let id = self.users.users.add(submission.record, &mut self.notifications).id;
                    self.after_submit(coerced);
                    self.select_user(id);
                }
                Err(error) => {
                    self.notify(Notification::error("Could not create user", error.to_string()))
                }
            },
            AppMode::AddPlan => match self.plans.form.submit() {
                Ok(Submission { record, coerced }) => {
                    self.plans.plans.add(record, &mut self.notifications);
                    self.after_submit(coerced);
                    self.plans.selected = self.plans.plans.len().saturating_sub(1);
                }
                Err(error) => {
                    self.notify(Notification::error("Could not create plan", error.to_string()))
                }
            },
            _ => {}
        }
    }

    fn after_submit(&mut self, coerced: Vec<&'static str>) {
        self.mode = AppMode::Normal;
        if !coerced.is_empty() {
            self.notify(Notification::error(
                "Check numeric fields",
                format!("Could not read {} as a number", coerced.join(", ")),
            ));
        }
    }

    fn select_user(&mut self, id: RecordId) {
        let found = self.users.visible().iter().position(|u| u.id == id);
        if let Some(index) = found {
            self.users.selected = index;
        }
    }

    /// Deletes the selected user or plan.
    pub fn delete_selected(&mut self) {
        match self.page {
            Page::Users => {
                if let Some(id) = self.users.selected_user().map(|u| u.id) {
                    self.users.users.remove(id, &mut self.notifications);
                    self.users.clamp_selection();
                }
            }
            Page::Plans => {
                if let Some(id) = self.plans.selected_plan().map(|p| p.id) {
                    self.plans.plans.remove(id, &mut self.notifications);
                    self.plans.clamp_selection();
                }
            }
            _ => {}
        }
    }

    pub fn view_selected_user(&mut self) {
        if let Some(name) = self.selected_user_name() {
            self.notify(Notification::info("View details", format!("Viewing details of {name}")));
        }
    }

    pub fn edit_selected_user(&mut self) {
        if let Some(name) = self.selected_user_name() {
            self.notify(Notification::info("Edit user", format!("Editing {name}")));
        }
    }

    pub fn reset_selected_user_services(&mut self) {
        if let Some(name) = self.selected_user_name() {
            self.notify(Notification::info(
                "Services restarted",
                format!("{name}'s services have been restarted"),
            ));
        }
    }

    /// Marks the selected user inactive.
    pub fn suspend_selected_user(&mut self) {
        let Some(id) = self.users.selected_user().map(|u| u.id) else {
            return;
        };
        if let Some(user) = self.users.users.get_mut(id) {
            user.status = UserStatus::Inactive;
            let name = user.name().to_string();
            self.notify(Notification::error(
                "User suspended",
                format!("{name} has been suspended"),
            ));
        }
    }

    fn selected_user_name(&self) -> Option<String> {
        if self.page != Page::Users {
            return None;
        }
        self.users.selected_user().map(|u| u.name.clone())
    }

    pub fn cycle_stats_period(&mut self) {
        self.stats_period = self.stats_period.next();
    }

    /// Users currently shown in the table, for export.
    pub fn visible_users(&self) -> Vec<&User> {
        self.users.visible().to_vec()
    }

    /// Processes the result of an export.
    ///
    /// # Arguments
    ///
    /// * `result` - Path written to, or an error message
    pub fn set_export_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(path) => {
                self.notify(Notification::info("Export complete", format!("Exported to {path}")))
            }
            Err(error) => self.notify(Notification::error("Export failed", error)),
        }
    }
}
