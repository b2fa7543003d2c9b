//! Course catalog and per-student registrations
//!
//! Backs the course card's register/unregister actions. Courses are loaded
//! once (from a JSON file or the bundled sample set) and kept in memory.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::models::{Course, TimeSlot};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown course: {0}")]
    UnknownCourse(String),
    #[error("Course {0} is full")]
    CourseFull(String),
    #[error("Already registered for {0}")]
    AlreadyRegistered(String),
    #[error("Not registered for {0}")]
    NotRegistered(String),
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Default)]
struct CatalogState {
    courses: Vec<Course>,
    /// user id -> registered course ids
    registrations: HashMap<String, HashSet<String>>,
}

pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            state: RwLock::new(CatalogState {
                courses,
                registrations: HashMap::new(),
            }),
        }
    }

    /// Load a catalog from a JSON array of courses
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let courses: Vec<Course> = serde_json::from_str(&json)?;
        tracing::info!(path = %path.display(), count = courses.len(), "loaded course catalog");
        Ok(Self::new(courses))
    }

    pub fn courses(&self) -> Vec<Course> {
        self.state.read().courses.clone()
    }

    pub fn course(&self, course_id: &str) -> Option<Course> {
        self.state
            .read()
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
    }

    pub fn is_registered(&self, user_id: &str, course_id: &str) -> bool {
        self.state
            .read()
            .registrations
            .get(user_id)
            .is_some_and(|ids| ids.contains(course_id))
    }

    pub fn registered_ids(&self, user_id: &str) -> HashSet<String> {
        self.state
            .read()
            .registrations
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Enroll `user_id` in `course_id`, taking one seat
    pub fn register(&self, user_id: &str, course_id: &str) -> Result<(), CatalogError> {
        let mut state = self.state.write();
        let CatalogState {
            courses,
            registrations,
        } = &mut *state;

        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| CatalogError::UnknownCourse(course_id.to_string()))?;

        let already = registrations
            .get(user_id)
            .is_some_and(|ids| ids.contains(course_id));
        if already {
            return Err(CatalogError::AlreadyRegistered(course.code.clone()));
        }
        if course.is_full() {
            return Err(CatalogError::CourseFull(course.code.clone()));
        }

        course.enrolled_students += 1;
        registrations
            .entry(user_id.to_string())
            .or_default()
            .insert(course_id.to_string());
        tracing::info!(user_id, course = %course.code, "registered for course");
        Ok(())
    }

    /// Withdraw `user_id` from `course_id`, releasing the seat
    pub fn unregister(&self, user_id: &str, course_id: &str) -> Result<(), CatalogError> {
        let mut state = self.state.write();
        let CatalogState {
            courses,
            registrations,
        } = &mut *state;

        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| CatalogError::UnknownCourse(course_id.to_string()))?;

        let removed = registrations
            .get_mut(user_id)
            .is_some_and(|ids| ids.remove(course_id));
        if !removed {
            return Err(CatalogError::NotRegistered(course.code.clone()));
        }

        course.enrolled_students = course.enrolled_students.saturating_sub(1);
        tracing::info!(user_id, course = %course.code, "unregistered from course");
        Ok(())
    }
}

/// Courses shown when no catalog file is configured
pub fn sample_courses() -> Vec<Course> {
    let weekly = |days: &[&str], start: &str, end: &str| -> Vec<TimeSlot> {
        days.iter().map(|d| TimeSlot::new(d, start, end)).collect()
    };

    vec![
        Course {
            id: "1".to_string(),
            name: "Data Structures and Algorithms".to_string(),
            code: "CSE2001".to_string(),
            description: "Arrays, linked lists, trees, graphs and the algorithms that work on them."
                .to_string(),
            professor: "Dr. Rajesh Kumar".to_string(),
            branch: "CSE".to_string(),
            semester: 3,
            fee: 45000.0,
            credits: 4,
            enrolled_students: 45,
            max_students: 60,
            time_slots: weekly(&["Monday", "Wednesday", "Friday"], "09:00", "10:00"),
        },
        Course {
            id: "2".to_string(),
            name: "Digital Signal Processing".to_string(),
            code: "ECE3002".to_string(),
            description: "Sampling, the z-transform, FIR and IIR filter design.".to_string(),
            professor: "Dr. Priya Sharma".to_string(),
            branch: "ECE".to_string(),
            semester: 5,
            fee: 42000.0,
            credits: 3,
            enrolled_students: 38,
            max_students: 40,
            time_slots: weekly(&["Tuesday", "Thursday"], "11:00", "12:30"),
        },
        Course {
            id: "3".to_string(),
            name: "Thermodynamics".to_string(),
            code: "MECH2003".to_string(),
            description: "Laws of thermodynamics, entropy and power cycles.".to_string(),
            professor: "Dr. Anil Verma".to_string(),
            branch: "MECH".to_string(),
            semester: 3,
            fee: 40000.0,
            credits: 4,
            enrolled_students: 50,
            max_students: 50,
            time_slots: weekly(&["Monday", "Thursday"], "14:00", "15:30"),
        },
        Course {
            id: "4".to_string(),
            name: "Database Management Systems".to_string(),
            code: "IT2004".to_string(),
            description: "Relational modelling, SQL, normalization and transactions.".to_string(),
            professor: "Dr. Meera Nair".to_string(),
            branch: "IT".to_string(),
            semester: 4,
            fee: 43500.0,
            credits: 4,
            enrolled_students: 20,
            max_students: 60,
            time_slots: weekly(&["Tuesday", "Wednesday", "Friday"], "10:00", "11:00"),
        },
        Course {
            id: "5".to_string(),
            name: "Power Systems".to_string(),
            code: "EEE3005".to_string(),
            description: "Generation, transmission and protection of electrical power.".to_string(),
            professor: "Dr. Sanjay Gupta".to_string(),
            branch: "EEE".to_string(),
            semester: 5,
            fee: 41000.0,
            credits: 3,
            enrolled_students: 33,
            max_students: 50,
            time_slots: weekly(&["Monday", "Wednesday"], "15:00", "16:30"),
        },
    ]
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(sample_courses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_register_takes_a_seat() {
        let catalog = InMemoryCatalog::default();
        let before = catalog.course("4").unwrap().enrolled_students;

        catalog.register("u1", "4").unwrap();
        assert!(catalog.is_registered("u1", "4"));
        assert!(!catalog.is_registered("u2", "4"));
        assert_eq!(catalog.course("4").unwrap().enrolled_students, before + 1);

        catalog.unregister("u1", "4").unwrap();
        assert!(!catalog.is_registered("u1", "4"));
        assert_eq!(catalog.course("4").unwrap().enrolled_students, before);
    }

    #[test]
    fn test_register_rejects_full_course() {
        let catalog = InMemoryCatalog::default();
        assert!(matches!(
            catalog.register("u1", "3"),
            Err(CatalogError::CourseFull(_))
        ));
        assert!(catalog.registered_ids("u1").is_empty());
    }

    #[test]
    fn test_failed_register_leaves_no_entry() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.register("u1", "3").is_err());
        assert!(catalog.register("u1", "missing").is_err());
        assert!(!catalog.state.read().registrations.contains_key("u1"));

        catalog.register("u1", "1").unwrap();
        assert!(catalog.state.read().registrations.contains_key("u1"));
    }

    #[test]
    fn test_register_twice_is_rejected() {
        let catalog = InMemoryCatalog::default();
        catalog.register("u1", "1").unwrap();
        assert!(matches!(
            catalog.register("u1", "1"),
            Err(CatalogError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_unregister_without_registration() {
        let catalog = InMemoryCatalog::default();
        assert!(matches!(
            catalog.unregister("u1", "1"),
            Err(CatalogError::NotRegistered(_))
        ));
        assert!(matches!(
            catalog.unregister("u1", "missing"),
            Err(CatalogError::UnknownCourse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_courses()[..2]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = InMemoryCatalog::load(file.path()).unwrap();
        let courses = catalog.courses();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].code, "ECE3002");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(
            InMemoryCatalog::load(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }
}
