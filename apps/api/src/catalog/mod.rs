//! The fixed program catalog and the six letter categories.
//!
//! Both are built once at startup and shared read-only through `AppState`.

pub mod handlers;
mod programs;

use crate::models::program::{Category, Program};

#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
}

impl ProgramCatalog {
    pub fn new(programs: Vec<Program>) -> Self {
        Self { programs }
    }

    /// The built-in catalog of degree programs.
    pub fn seeded() -> Self {
        Self::new(programs::seed_programs())
    }

    /// All programs in catalog order. Ties in ranking keep this order.
    pub fn all(&self) -> &[Program] {
        &self.programs
    }

    pub fn get(&self, key: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.key == key)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn seeded() -> Self {
        Self {
            categories: programs::seed_categories(),
        }
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    #[allow(dead_code)]
    pub fn get(&self, letter: char) -> Option<&Category> {
        self.categories.iter().find(|c| c.letter == letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_program_keys_are_unique() {
        let catalog = ProgramCatalog::seeded();
        let keys: HashSet<&str> = catalog.all().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys.len(), catalog.all().len());
        assert_eq!(catalog.all().len(), 14);
    }

    #[test]
    fn test_get_by_key() {
        let catalog = ProgramCatalog::seeded();
        let nursing = catalog.get("nursing").unwrap();
        assert_eq!(nursing.college, "College of Public Health");
        assert!(nursing.has_keyword("helping"));
        assert!(catalog.get("astrology").is_none());
    }

    #[test]
    fn test_every_program_has_keywords_and_careers() {
        for program in ProgramCatalog::seeded().all() {
            assert!(!program.keywords.is_empty(), "{} has no keywords", program.key);
            assert!(!program.careers.is_empty(), "{} has no careers", program.key);
        }
    }

    #[test]
    fn test_six_categories_a_to_f() {
        let categories = CategoryCatalog::seeded();
        let letters: String = categories.all().iter().map(|c| c.letter).collect();
        assert_eq!(letters, "ABCDEF");
        assert_eq!(categories.get('E').unwrap().programs.len(), 3);
        assert!(categories.get('G').is_none());
    }
}
