use super::*;

#[test]
fn default_portfolio_is_valid_and_sized() {
    let p = Portfolio::default();
    p.validate().unwrap();
    assert_eq!(p.projects.len(), 4);
    assert_eq!(p.skills.len(), 6);
    assert_eq!(p.interests.len(), 2);
    assert_eq!(p.website.features.len(), 3);
    assert_eq!(p.education.gpa, 7.9);
}

#[test]
fn profile_json_accepts_hex_colors() {
    let mut json = serde_json::to_value(Portfolio::default()).unwrap();
    json["skills"][0]["color"] = serde_json::json!("#FF0000");
    json["skills"][0]["level"] = serde_json::json!(50.0);
    let p = Portfolio::from_json_reader(json.to_string().as_bytes()).unwrap();
    assert_eq!(p.skills[0].color.to_hex(), "#FF0000");
    assert_eq!(p.skills[0].level, 50.0);
}

#[test]
fn out_of_range_skill_level_is_rejected() {
    let mut p = Portfolio::default();
    p.skills[2].level = 120.0;
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("Frontend"));
}

#[test]
fn empty_sections_are_rejected() {
    let mut p = Portfolio::default();
    p.interests.clear();
    assert!(p.validate().is_err());

    let mut p = Portfolio::default();
    p.projects = (0..7).map(|_| p.projects[0].clone()).collect();
    assert!(p.validate().is_err());

    let mut p = Portfolio::default();
    p.intro.name = "  ".to_owned();
    assert!(p.validate().is_err());
}

#[test]
fn unknown_top_level_fields_are_rejected() {
    let mut json = serde_json::to_value(Portfolio::default()).unwrap();
    json["extra"] = serde_json::json!(1);
    let err = Portfolio::from_json_reader(json.to_string().as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("serialization error"));
}

#[test]
fn unknown_fields_inside_entries_are_rejected() {
    let pointers = [
        "/intro",
        "/projects/0",
        "/skills/2",
        "/website/features/1",
        "/contact/lines/0",
    ];
    for pointer in pointers {
        let mut json = serde_json::to_value(Portfolio::default()).unwrap();
        json.pointer_mut(pointer).unwrap()["extra"] = serde_json::json!(1);
        let err = Portfolio::from_json_reader(json.to_string().as_bytes()).unwrap_err();
        assert!(err.to_string().contains("extra"), "{pointer}: {err}");
    }
}
