use crate::application::{App, AppMode, Page};
use crate::domain::{FormSchema, FormStateController};
use crate::infrastructure::Exporter;
use crossterm::event::{KeyCode, KeyModifiers};

/// What a key press inside a dialog asks of the page that owns it.
#[derive(Debug, PartialEq, Eq)]
enum DialogAction {
    Submit,
    Cancel,
    Edited,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::Search => Self::handle_search_mode(app, key),
            AppMode::AddUser => {
                let action = Self::edit_form(&mut app.users.form, key, modifiers);
                Self::apply_dialog_action(app, action);
            }
            AppMode::AddPlan => {
                let action = Self::edit_form(&mut app.plans.form, key, modifiers);
                Self::apply_dialog_action(app, action);
            }
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Tab => app.next_page(),
            KeyCode::BackTab => app.previous_page(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char('a') => app.open_add_dialog(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            KeyCode::Char('v') => app.view_selected_user(),
            KeyCode::Char('e') => app.edit_selected_user(),
            KeyCode::Char('r') => app.reset_selected_user_services(),
            KeyCode::Char('s') if app.page == Page::Users => app.suspend_selected_user(),
            KeyCode::Char('x') => Self::export_current_page(app),
            KeyCode::Char('p') if app.page == Page::Stats => app.cycle_stats_period(),
            KeyCode::F(1) | KeyCode::Char('?') => app.toggle_help(),
            KeyCode::Esc => app.notifications.dismiss_all(),
            _ => {}
        }
    }

    fn export_current_page(app: &mut App) {
        let result = match app.page {
            Page::Users => Exporter::export_users(&app.visible_users(), &app.export_dir),
            Page::Plans => Exporter::export_plans(app.plans.plans.records(), &app.export_dir),
            _ => return,
        };
        if let Err(e) = &result {
            tracing::warn!(error = %e, "export failed");
        }
        app.set_export_result(
            result
                .map(|path| path.display().to_string())
                .map_err(|e| e.to_string()),
        );
    }

    fn edit_form<S: FormSchema>(
        form: &mut FormStateController<S>,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> DialogAction {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('u') {
                form.reset();
            }
            return DialogAction::Edited;
        }

        match key {
            KeyCode::Enter => return DialogAction::Submit,
            KeyCode::Esc => return DialogAction::Cancel,
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(' ')
                if form
                    .focused_field()
                    .is_some_and(|field| S::choices(field).is_some()) =>
            {
                form.cycle_choice(true)
            }
            KeyCode::Char(c) => form.type_char(c),
            _ => {}
        }
        DialogAction::Edited
    }

    fn apply_dialog_action(app: &mut App, action: DialogAction) {
        match action {
            DialogAction::Submit => app.submit_dialog(),
            DialogAction::Cancel => app.cancel_dialog(),
            DialogAction::Edited => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_search_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_search(),
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Backspace => app.delete_search_char(),
            KeyCode::Down => app.select_next(),
            KeyCode::Up => app.select_previous(),
            KeyCode::Char(c) => app.insert_search_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlanField, RecordId, UserField};
    use std::path::PathBuf;
    use std::time::Duration;

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn on_page(page: Page) -> App {
        let mut app = App::default();
        app.go_to(page);
        app
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.page, Page::Stats);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.page, Page::Settings);
    }

    #[test]
    fn test_add_user_through_keys() {
        let mut app = on_page(Page::Users);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, AppMode::AddUser);

        type_text(&mut app, "Ana Lopez");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ana@example.com");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        let draft = app.users.form.draft().unwrap();
        assert_eq!(draft.get(UserField::Role), "Reseller");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        let user = app.users.users.get(RecordId(6)).unwrap();
        assert_eq!(user.name, "Ana Lopez");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.role.as_str(), "Reseller");
    }

    #[test]
    fn test_typing_in_dialog_does_not_trigger_shortcuts() {
        let mut app = on_page(Page::Users);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "dx?");

        assert_eq!(app.mode, AppMode::AddUser);
        assert_eq!(app.users.users.len(), 5);
        assert_eq!(app.users.form.draft().unwrap().get(UserField::Name), "dx?");
    }

    #[test]
    fn test_dialog_escape_and_clear() {
        let mut app = on_page(Page::Plans);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Temp");
        InputHandler::handle_key_event(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(app.plans.form.draft().unwrap().get(PlanField::Name), "");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.plans.form.is_open());
        assert_eq!(app.plans.plans.len(), 3);
    }

    #[test]
    fn test_space_cycles_choice_fields_only() {
        let mut app = on_page(Page::Plans);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Two words");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));

        let draft = app.plans.form.draft().unwrap();
        assert_eq!(draft.get(PlanField::Name), "Two words");
        assert_eq!(draft.get(PlanField::BillingCycle), "Quarterly");
    }

    #[test]
    fn test_search_mode_keys() {
        let mut app = on_page(Page::Users);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "garcia");
        assert_eq!(app.visible_users().len(), 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.users.search_query, "garci");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.users.search_query, "garci");

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert!(app.users.search_query.is_empty());
    }

    #[test]
    fn test_delete_and_suspend_keys() {
        let mut app = on_page(Page::Users);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.users.selected_user().unwrap().status.as_str(), "Inactive");

        press(&mut app, KeyCode::Char('d'));
        assert!(app.users.users.get(RecordId(2)).is_none());

        press(&mut app, KeyCode::Esc);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_period_key_only_on_stats() {
        let mut app = on_page(Page::Users);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.stats_period.label(), "Last 7 days");

        app.go_to(Page::Stats);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.stats_period.label(), "Last 30 days");
    }

    #[test]
    fn test_help_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 0);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.help_scroll, 5);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_export_writes_to_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Page::Plans, Duration::from_secs(4), dir.path().to_path_buf());
        press(&mut app, KeyCode::Char('x'));

        assert!(dir.path().join("plans.json").exists());
        let toast = app.notifications.latest().unwrap();
        assert_eq!(toast.title, "Export complete");

        app.go_to(Page::Users);
        press(&mut app, KeyCode::Char('x'));
        assert!(dir.path().join("users.csv").exists());
    }

    #[test]
    fn test_export_failure_raises_error_toast() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut app = App::new(Page::Users, Duration::from_secs(4), PathBuf::from(&blocker));
        press(&mut app, KeyCode::Char('x'));

        let toast = app.notifications.latest().unwrap();
        assert_eq!(toast.title, "Export failed");
        assert!(toast.is_error());
    }
}
