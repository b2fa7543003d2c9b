use std::sync::Arc;

use enroll_core::catalog::InMemoryCatalog;
use enroll_core::events::{CoreEvent, RegisterOutcome};
use enroll_core::models::{Course, UserProfile};
use enroll_core::runtime::CoreHandle;

use crate::ui::course_card::{CardAction, CourseCard};
use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::register_form::{RegisterFormState, SubmitStart};
use crate::ui::services::AnimationClock;
use crate::ui::views::sign_in::{SignInField, SignInState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Register,
    SignIn,
    Courses,
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C arms quit, second one exits
    pub pending_quit: bool,
    pub view: View,

    pub register_form: RegisterFormState,
    pub sign_in: SignInState,
    pub user: Option<UserProfile>,

    /// Snapshot of the catalog, refreshed after every change
    pub courses: Vec<Course>,
    pub selected_course: usize,
    /// Card columns in the last rendered frame, for up/down navigation
    pub course_columns: usize,

    catalog: Arc<InMemoryCatalog>,
    core: CoreHandle,
    /// Id for the next `register` call; unique across form instances
    next_submission: u64,
    notifications: NotificationQueue,
    animation_clock: AnimationClock,
}

impl App {
    pub fn new(catalog: Arc<InMemoryCatalog>, core: CoreHandle) -> Self {
        let courses = catalog.courses();
        Self {
            running: true,
            pending_quit: false,
            view: View::Register,
            register_form: RegisterFormState::new(),
            sign_in: SignInState::new(),
            user: None,
            courses,
            selected_course: 0,
            course_columns: 1,
            catalog,
            core,
            next_submission: 1,
            notifications: NotificationQueue::new(),
            animation_clock: AnimationClock::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show the registration form with fresh state
    pub fn show_register(&mut self) {
        self.register_form = RegisterFormState::new();
        self.view = View::Register;
    }

    /// Show the sign-in form with fresh state
    pub fn show_sign_in(&mut self) {
        self.sign_in = SignInState::new();
        self.view = View::SignIn;
    }

    /// Switch between the two auth forms ("Sign In" / "Sign Up" links)
    pub fn on_toggle_form(&mut self) {
        match self.view {
            View::Register => self.show_sign_in(),
            View::SignIn => self.show_register(),
            View::Courses => {}
        }
    }

    fn show_courses(&mut self) {
        self.refresh_courses();
        self.selected_course = 0;
        self.view = View::Courses;
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.show_sign_in();
    }

    // =========================================================================
    // Registration form
    // =========================================================================

    /// Submit the registration form.
    ///
    /// Field constraints are checked first; if one fails, focus moves to the
    /// field and the submit handler does not run.
    pub fn submit_register_form(&mut self) {
        // Submit button is disabled while a call is in flight
        if self.register_form.loading {
            tracing::debug!("registration already in flight");
            return;
        }

        if let Some((field, problem)) = self.register_form.first_invalid_field() {
            self.register_form.focus = field;
            self.notify(Notification::warning(format!("{}: {}", field.label(), problem)));
            return;
        }

        match self.register_form.begin_submit() {
            SubmitStart::Ready(payload) => {
                let id = self.next_submission;
                self.next_submission += 1;
                tracing::info!(submission = id, email = %payload.email, "submitting registration");
                self.register_form.track_submission(id, &payload);
                self.core.spawn_register(id, payload);
            }
            SubmitStart::Invalid(e) => {
                tracing::debug!("registration blocked: {}", e);
            }
            SubmitStart::Busy => {
                tracing::debug!("registration already in flight");
            }
        }
    }

    fn handle_register_outcome(&mut self, submission: u64, outcome: RegisterOutcome) {
        let pending = if self.view == View::Register {
            self.register_form.take_submission(submission)
        } else {
            None
        };
        // Any other id was started by a form that has since been unmounted
        let Some(pending) = pending else {
            tracing::debug!(submission, ?outcome, "dropping register outcome for unmounted form");
            return;
        };

        self.register_form.finish_submit(&outcome);
        if let RegisterOutcome::Created { .. } = outcome {
            self.notify(Notification::success("Account created"));
            self.core.spawn_login(pending.email, pending.password);
        }
    }

    // =========================================================================
    // Sign in
    // =========================================================================

    pub fn submit_sign_in(&mut self) {
        if self.sign_in.loading {
            return;
        }
        if let Some(field) = self.sign_in.first_missing_field() {
            self.sign_in.focus = field;
            let label = match field {
                SignInField::Email => "Email Address",
                SignInField::Password => "Password",
            };
            self.notify(Notification::warning(format!(
                "{}: Please fill out this field.",
                label
            )));
            return;
        }

        self.sign_in.error.clear();
        self.sign_in.loading = true;
        self.core
            .spawn_login(self.sign_in.email.clone(), self.sign_in.password.clone());
    }

    fn handle_login_result(&mut self, result: Result<Option<UserProfile>, String>) {
        self.sign_in.loading = false;
        match result {
            Ok(Some(profile)) => {
                tracing::info!(user_id = %profile.id, "signed in");
                self.notify(Notification::success(format!(
                    "Welcome, {}",
                    profile.full_name
                )));
                self.user = Some(profile);
                self.show_courses();
            }
            Ok(None) => self.show_sign_in_error("Invalid email or password"),
            Err(e) => {
                tracing::warn!("sign in failed: {}", e);
                self.show_sign_in_error("Sign in failed. Please try again.");
            }
        }
    }

    /// Sign-in after account creation runs from the register view; a failure
    /// there moves to the sign-in form so the message is visible.
    fn show_sign_in_error(&mut self, message: &str) {
        if self.view != View::SignIn {
            self.show_sign_in();
        }
        self.sign_in.error = message.to_string();
    }

    // =========================================================================
    // Courses
    // =========================================================================

    pub fn refresh_courses(&mut self) {
        self.courses = self.catalog.courses();
        if self.selected_course >= self.courses.len() {
            self.selected_course = self.courses.len().saturating_sub(1);
        }
    }

    pub fn is_registered(&self, course_id: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| self.catalog.is_registered(&u.id, course_id))
    }

    pub fn select_course_offset(&mut self, delta: isize) {
        if self.courses.is_empty() {
            return;
        }
        let max = self.courses.len() as isize - 1;
        self.selected_course = (self.selected_course as isize + delta).clamp(0, max) as usize;
    }

    /// Press the selected card's button
    pub fn activate_selected_course(&mut self) {
        let Some(course) = self.courses.get(self.selected_course) else {
            return;
        };
        let action = CourseCard::new(course)
            .registered(self.is_registered(&course.id))
            .press();

        match action {
            Some(action) => self.apply_card_action(action),
            None => self.notify(Notification::info(format!("{} is full", course.code))),
        }
    }

    fn apply_card_action(&mut self, action: CardAction) {
        let Some(user_id) = self.user.as_ref().map(|u| u.id.clone()) else {
            self.notify(Notification::warning("Sign in to manage courses"));
            return;
        };

        let result = match &action {
            CardAction::Register(id) => self.catalog.register(&user_id, id),
            CardAction::Unregister(id) => self.catalog.unregister(&user_id, id),
        };

        match (result, action) {
            (Ok(()), CardAction::Register(id)) => {
                self.notify(Notification::success(format!("Registered for {}", self.code_of(&id))));
            }
            (Ok(()), CardAction::Unregister(id)) => {
                self.notify(Notification::info(format!("Unregistered from {}", self.code_of(&id))));
            }
            (Err(e), _) => {
                tracing::warn!("course action failed: {}", e);
                self.notify(Notification::error(e.to_string()));
            }
        }
        self.refresh_courses();
    }

    fn code_of(&self, course_id: &str) -> String {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .map(|c| c.code.clone())
            .unwrap_or_else(|| course_id.to_string())
    }

    // =========================================================================
    // Background events, ticks, notifications
    // =========================================================================

    pub fn handle_core_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::RegisterFinished {
                submission,
                outcome,
            } => self.handle_register_outcome(submission, outcome),
            CoreEvent::LoginFinished(result) => self.handle_login_result(result),
        }
    }

    pub fn tick(&mut self) {
        self.animation_clock.tick();
        self.notifications.tick();
    }

    pub fn spinner_char(&self) -> char {
        self.animation_clock.spinner_char()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }
}
