//! Course card logic: enrollment figures and the action button
//!
//! Everything here is derived from the course on each render; the card keeps
//! no state of its own.

use enroll_core::models::Course;

/// Share of seats taken, 0-100. `None` when the course has no seats at all.
pub fn enrollment_percentage(course: &Course) -> Option<f64> {
    if course.max_students == 0 {
        return None;
    }
    Some(course.enrolled_students as f64 / course.max_students as f64 * 100.0)
}

/// Percentage label as shown next to the bar (`"75%"`, or `"n/a"` without seats)
pub fn percentage_label(percentage: Option<f64>) -> String {
    match percentage {
        Some(p) => format!("{}%", p.round() as i64),
        None => "n/a".to_string(),
    }
}

/// Colour bracket of the enrollment bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentLevel {
    /// 60% or less
    Ok,
    /// Above 60%, up to and including 80%
    Warning,
    /// Above 80%
    Danger,
}

impl EnrollmentLevel {
    pub fn from_percentage(percentage: Option<f64>) -> Self {
        match percentage {
            None => EnrollmentLevel::Danger,
            Some(p) if p > 80.0 => EnrollmentLevel::Danger,
            Some(p) if p > 60.0 => EnrollmentLevel::Warning,
            Some(_) => EnrollmentLevel::Ok,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActionKind {
    Register,
    Unregister,
}

/// What pressing the button asks the parent to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Register(String),
    Unregister(String),
}

/// The card's single button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardButton {
    pub label: &'static str,
    pub enabled: bool,
    pub action: Option<CardActionKind>,
}

pub const LABEL_REGISTER: &str = "Register Course";
pub const LABEL_UNREGISTER: &str = "Unregister Course";
pub const LABEL_FULL: &str = "Course Full";

/// Button for a card, as a function of registration and capacity
pub fn card_button(is_registered: bool, is_full: bool) -> CardButton {
    match (is_registered, is_full) {
        (true, _) => CardButton {
            label: LABEL_UNREGISTER,
            enabled: true,
            action: Some(CardActionKind::Unregister),
        },
        (false, false) => CardButton {
            label: LABEL_REGISTER,
            enabled: true,
            action: Some(CardActionKind::Register),
        },
        (false, true) => CardButton {
            label: LABEL_FULL,
            enabled: false,
            action: None,
        },
    }
}

type CourseCallback<'a> = Box<dyn Fn(&str) + 'a>;

/// A course summary with an enroll/withdraw action
pub struct CourseCard<'a> {
    course: &'a Course,
    is_registered: bool,
    on_register: Option<CourseCallback<'a>>,
    on_unregister: Option<CourseCallback<'a>>,
}

impl<'a> CourseCard<'a> {
    pub fn new(course: &'a Course) -> Self {
        Self {
            course,
            is_registered: false,
            on_register: None,
            on_unregister: None,
        }
    }

    pub fn registered(mut self, is_registered: bool) -> Self {
        self.is_registered = is_registered;
        self
    }

    pub fn on_register(mut self, callback: impl Fn(&str) + 'a) -> Self {
        self.on_register = Some(Box::new(callback));
        self
    }

    pub fn on_unregister(mut self, callback: impl Fn(&str) + 'a) -> Self {
        self.on_unregister = Some(Box::new(callback));
        self
    }

    pub fn course(&self) -> &Course {
        self.course
    }

    pub fn is_registered(&self) -> bool {
        self.is_registered
    }

    pub fn percentage(&self) -> Option<f64> {
        enrollment_percentage(self.course)
    }

    pub fn level(&self) -> EnrollmentLevel {
        EnrollmentLevel::from_percentage(self.percentage())
    }

    pub fn button(&self) -> CardButton {
        card_button(self.is_registered, self.course.is_full())
    }

    /// Action the button would request, without invoking any callback
    pub fn press(&self) -> Option<CardAction> {
        let button = self.button();
        if !button.enabled {
            return None;
        }
        button.action.map(|kind| match kind {
            CardActionKind::Register => CardAction::Register(self.course.id.clone()),
            CardActionKind::Unregister => CardAction::Unregister(self.course.id.clone()),
        })
    }

    /// Click the button: calls the matching callback with the course id.
    /// Missing callbacks and disabled buttons are no-ops.
    pub fn click(&self) {
        let callback = match self.button().action {
            Some(CardActionKind::Register) if self.button().enabled => self.on_register.as_ref(),
            Some(CardActionKind::Unregister) => self.on_unregister.as_ref(),
            _ => None,
        };
        if let Some(callback) = callback {
            callback(&self.course.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn course(enrolled: u32, max: u32) -> Course {
        Course {
            id: "course-42".to_string(),
            name: "Operating Systems".to_string(),
            code: "CSE3003".to_string(),
            description: "Processes, memory and file systems".to_string(),
            professor: "Dr. Menon".to_string(),
            branch: "CSE".to_string(),
            semester: 5,
            fee: 47000.0,
            credits: 4,
            enrolled_students: enrolled,
            max_students: max,
            time_slots: Vec::new(),
        }
    }

    #[test]
    fn test_enrollment_percentage() {
        assert_eq!(enrollment_percentage(&course(15, 60)), Some(25.0));
        assert_eq!(enrollment_percentage(&course(30, 30)), Some(100.0));
        assert_eq!(enrollment_percentage(&course(0, 45)), Some(0.0));
        assert_eq!(enrollment_percentage(&course(0, 0)), None);
    }

    #[test]
    fn test_percentage_label_rounds() {
        // 29/30 = 96.67
        assert_eq!(percentage_label(enrollment_percentage(&course(29, 30))), "97%");
        // 1/8 = 12.5 rounds half up
        assert_eq!(percentage_label(enrollment_percentage(&course(1, 8))), "13%");
        assert_eq!(percentage_label(None), "n/a");
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(EnrollmentLevel::from_percentage(Some(81.0)), EnrollmentLevel::Danger);
        assert_eq!(EnrollmentLevel::from_percentage(Some(80.0001)), EnrollmentLevel::Danger);
        assert_eq!(EnrollmentLevel::from_percentage(Some(80.0)), EnrollmentLevel::Warning);
        assert_eq!(EnrollmentLevel::from_percentage(Some(61.0)), EnrollmentLevel::Warning);
        assert_eq!(EnrollmentLevel::from_percentage(Some(60.0001)), EnrollmentLevel::Warning);
        assert_eq!(EnrollmentLevel::from_percentage(Some(60.0)), EnrollmentLevel::Ok);
        assert_eq!(EnrollmentLevel::from_percentage(Some(0.0)), EnrollmentLevel::Ok);
        assert_eq!(EnrollmentLevel::from_percentage(None), EnrollmentLevel::Danger);
    }

    #[test]
    fn test_card_button_states() {
        assert_eq!(card_button(true, false).label, LABEL_UNREGISTER);
        assert_eq!(card_button(true, true).label, LABEL_UNREGISTER);
        assert!(card_button(true, true).enabled);

        let open = card_button(false, false);
        assert_eq!(open.label, LABEL_REGISTER);
        assert!(open.enabled);
        assert_eq!(open.action, Some(CardActionKind::Register));

        let full = card_button(false, true);
        assert_eq!(full.label, LABEL_FULL);
        assert!(!full.enabled);
        assert_eq!(full.action, None);
    }

    #[test]
    fn test_full_course_never_calls_register() {
        let course = course(30, 30);
        let calls = RefCell::new(Vec::new());
        let card = CourseCard::new(&course).on_register(|id| calls.borrow_mut().push(id.to_string()));

        assert_eq!(card.button().label, LABEL_FULL);
        assert!(!card.button().enabled);
        card.click();
        assert!(calls.borrow().is_empty());
        assert_eq!(card.press(), None);
    }

    #[test]
    fn test_open_course_calls_register_once() {
        let course = course(29, 30);
        let registers = RefCell::new(Vec::new());
        let unregisters = RefCell::new(0);
        let card = CourseCard::new(&course)
            .on_register(|id| registers.borrow_mut().push(id.to_string()))
            .on_unregister(|_| *unregisters.borrow_mut() += 1);

        card.click();
        assert_eq!(*registers.borrow(), vec!["course-42".to_string()]);
        assert_eq!(*unregisters.borrow(), 0);
        assert_eq!(card.press(), Some(CardAction::Register("course-42".to_string())));
    }

    #[test]
    fn test_registered_course_calls_unregister() {
        let course = course(30, 30);
        let registers = RefCell::new(0);
        let unregisters = RefCell::new(Vec::new());
        let card = CourseCard::new(&course)
            .registered(true)
            .on_register(|_| *registers.borrow_mut() += 1)
            .on_unregister(|id| unregisters.borrow_mut().push(id.to_string()));

        card.click();
        assert_eq!(*unregisters.borrow(), vec!["course-42".to_string()]);
        assert_eq!(*registers.borrow(), 0);
    }

    #[test]
    fn test_missing_callbacks_are_tolerated() {
        let course = course(3, 30);
        CourseCard::new(&course).click();
        CourseCard::new(&course).registered(true).click();
    }

    #[test]
    fn test_zero_capacity_course_is_full() {
        let course = course(0, 0);
        let card = CourseCard::new(&course);
        assert_eq!(card.percentage(), None);
        assert_eq!(card.level(), EnrollmentLevel::Danger);
        assert_eq!(card.button().label, LABEL_FULL);
    }
}
