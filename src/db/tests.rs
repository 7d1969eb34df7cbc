//! Storage layer integration tests.

#[cfg(test)]
mod db_tests {
    use super::super::*;
    use crate::error::AppError;
    use crate::models::palette::{NewPalette, PaletteFields};
    use tempfile::TempDir;

    fn setup_test_db() -> (Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Database::new(db_path.to_str().unwrap()).unwrap();
        (db, temp_dir)
    }

    fn sample_palette(name: &str, project_id: i64) -> NewPalette {
        NewPalette {
            name: name.to_string(),
            color1: "#ff0000".to_string(),
            color2: "#ffff00".to_string(),
            color3: "#ffffff".to_string(),
            color4: "#808000".to_string(),
            color5: "#239b56".to_string(),
            project_id,
        }
    }

    #[test]
    fn test_create_database() {
        let (db, _temp) = setup_test_db();
        assert!(db.projects.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_project_create_and_get() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Project 1").unwrap();
        let retrieved = db.projects.get(project.id).unwrap();
        assert_eq!(retrieved, Some(project));
    }

    #[test]
    fn test_project_duplicate_name_conflicts() {
        let (db, _temp) = setup_test_db();

        db.projects.create("Project 1").unwrap();
        let err = db.projects.create("Project 1").unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg)
            if msg == "Project name Project 1 already exists."));

        // No second row was inserted
        assert_eq!(db.projects.list(None).unwrap().len(), 1);
    }

    #[test]
    fn test_project_name_uniqueness_is_case_sensitive() {
        let (db, _temp) = setup_test_db();

        db.projects.create("Project 1").unwrap();
        assert!(db.projects.create("project 1").is_ok());
    }

    #[test]
    fn test_project_list_filters_case_insensitively() {
        let (db, _temp) = setup_test_db();

        db.projects.create("Project 1").unwrap();
        db.projects.create("Project 2").unwrap();
        db.projects.create("Empty").unwrap();

        let all = db.projects.list(None).unwrap();
        assert_eq!(all.len(), 3);

        let matching = db.projects.list(Some("project")).unwrap();
        assert_eq!(matching.len(), 2);
        assert!(matching.iter().all(|p| p.name.starts_with("Project")));

        let none = db.projects.list(Some("zzz")).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_project_rename() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Before").unwrap();
        assert!(db.projects.rename(project.id, "After").unwrap());
        assert_eq!(db.projects.get(project.id).unwrap().unwrap().name, "After");
    }

    #[test]
    fn test_project_rename_missing_returns_false() {
        let (db, _temp) = setup_test_db();
        assert!(!db.projects.rename(0, "Anything").unwrap());
    }

    #[test]
    fn test_project_delete_cascades_to_palettes() {
        let (db, _temp) = setup_test_db();

        let doomed = db.projects.create("Doomed").unwrap();
        let kept = db.projects.create("Kept").unwrap();
        db.palettes.create(&sample_palette("One", doomed.id)).unwrap();
        db.palettes.create(&sample_palette("Two", doomed.id)).unwrap();
        let survivor = db.palettes.create(&sample_palette("Three", kept.id)).unwrap();

        assert!(db.projects.delete(doomed.id).unwrap());

        assert_eq!(db.projects.get(doomed.id).unwrap(), None);
        assert!(db.palettes.list_for_project(doomed.id).unwrap().is_empty());
        // The other project's palettes are untouched
        assert_eq!(db.palettes.get(survivor.id).unwrap(), Some(survivor));
    }

    #[test]
    fn test_project_delete_with_no_palettes() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Empty").unwrap();
        assert!(db.projects.delete(project.id).unwrap());
        assert_eq!(db.projects.get(project.id).unwrap(), None);
    }

    #[test]
    fn test_project_delete_missing_does_not_mutate() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Survivor").unwrap();
        db.palettes.create(&sample_palette("One", project.id)).unwrap();

        assert!(!db.projects.delete(0).unwrap());
        assert_eq!(db.projects.list(None).unwrap().len(), 1);
        assert_eq!(db.palettes.list_for_project(project.id).unwrap().len(), 1);
    }

    #[test]
    fn test_palette_create_and_get() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Project 1").unwrap();
        let palette = db.palettes.create(&sample_palette("Warm", project.id)).unwrap();

        let retrieved = db.palettes.get(palette.id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Warm");
        assert_eq!(retrieved.color1, "#ff0000");
        assert_eq!(retrieved.project_id, project.id);
    }

    #[test]
    fn test_palette_duplicate_name_in_project_conflicts() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Project 1").unwrap();
        db.palettes.create(&sample_palette("Warm", project.id)).unwrap();

        let err = db.palettes.create(&sample_palette("Warm", project.id)).unwrap_err();
        let expected = format!(
            "Conflict. palette name Warm already exists in project id {}.",
            project.id
        );
        assert!(matches!(err, AppError::Conflict(ref msg) if *msg == expected));
        assert_eq!(db.palettes.list_for_project(project.id).unwrap().len(), 1);
    }

    #[test]
    fn test_palette_name_may_repeat_across_projects() {
        let (db, _temp) = setup_test_db();

        let first = db.projects.create("Project 1").unwrap();
        let second = db.projects.create("Project 2").unwrap();

        db.palettes.create(&sample_palette("Warm", first.id)).unwrap();
        assert!(db.palettes.create(&sample_palette("Warm", second.id)).is_ok());
    }

    #[test]
    fn test_palette_create_orphan_is_a_storage_error() {
        let (db, _temp) = setup_test_db();

        // No project exists; the foreign key rejects the insert
        let err = db.palettes.create(&sample_palette("Orphan", 42)).unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_palette_update_replaces_fields_but_not_owner() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Project 1").unwrap();
        let palette = db.palettes.create(&sample_palette("Warm", project.id)).unwrap();

        let fields = PaletteFields {
            name: "Cool".to_string(),
            color1: "#ffffff".to_string(),
            color2: "#ffffff".to_string(),
            color3: "#ffffff".to_string(),
            color4: "#ffffff".to_string(),
            color5: "#ffffff".to_string(),
        };
        assert!(db.palettes.update(palette.id, &fields).unwrap());

        let updated = db.palettes.get(palette.id).unwrap().unwrap();
        assert_eq!(updated.name, "Cool");
        assert_eq!(updated.color5, "#ffffff");
        assert_eq!(updated.project_id, project.id);
    }

    #[test]
    fn test_palette_update_missing_returns_false() {
        let (db, _temp) = setup_test_db();

        let fields = PaletteFields {
            name: "Cool".to_string(),
            color1: "#ffffff".to_string(),
            color2: "#ffffff".to_string(),
            color3: "#ffffff".to_string(),
            color4: "#ffffff".to_string(),
            color5: "#ffffff".to_string(),
        };
        assert!(!db.palettes.update(0, &fields).unwrap());
    }

    #[test]
    fn test_palette_delete() {
        let (db, _temp) = setup_test_db();

        let project = db.projects.create("Project 1").unwrap();
        let palette = db.palettes.create(&sample_palette("Warm", project.id)).unwrap();

        assert!(db.palettes.delete(palette.id).unwrap());
        assert_eq!(db.palettes.get(palette.id).unwrap(), None);
        assert!(!db.palettes.delete(palette.id).unwrap());
    }

    #[test]
    fn test_seed_replaces_all_rows() {
        let (db, _temp) = setup_test_db();

        db.projects.create("Leftover").unwrap();
        db.seed().unwrap();

        let projects = db.projects.list(None).unwrap();
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Project 1", "Project 2", "Empty"]);

        let first = &projects[0];
        let empty = &projects[2];
        assert_eq!(db.palettes.list_for_project(first.id).unwrap().len(), 2);
        assert!(db.palettes.list_for_project(empty.id).unwrap().is_empty());

        // Seeding again resets to the same fixture
        db.seed().unwrap();
        assert_eq!(db.projects.list(None).unwrap().len(), 3);
    }
}
