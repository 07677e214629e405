use anyhow::Result;
use coursely_application::ProfileEditor;

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

pub fn run(editor: &ProfileEditor, json: bool) -> Result<()> {
    println!("{}", render(editor, json)?);
    Ok(())
}

/// Major, minor and major track come from the stored profile. The rest of the
/// academic profile only lives for this run.
fn render(editor: &ProfileEditor, json: bool) -> Result<String> {
    let profile = editor.profile();
    let academic = editor.academic_profile();

    if json {
        let doc = serde_json::json!({
            "profile": profile,
            "academic": academic,
        });
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    let avatar = profile
        .profile_picture
        .clone()
        .unwrap_or_else(|| format!("[{}]", profile.initials()));

    let lines = [
        format!("{} {}", avatar, profile.full_name),
        format!("  Student ID:   {}", profile.student_id),
        format!("  Email:        {}", profile.email),
        format!("  Graduation:   {}", profile.expected_graduation),
        format!("  GPA:          {:.2}", profile.gpa),
        String::new(),
        format!("  Major:        {}", profile.major),
        format!("    Track:      {}", or_none(profile.track.as_deref())),
        format!("  Second major: {}", or_none(academic.second_major.as_deref())),
        format!("    Track:      {}", or_none(academic.second_major_track.as_deref())),
        format!("  Minor:        {}", or_none(profile.minor.as_deref())),
        format!("    Track:      {}", or_none(academic.minor_track.as_deref())),
        format!("  Second minor: {}", or_none(academic.second_minor.as_deref())),
        format!("    Track:      {}", or_none(academic.second_minor_track.as_deref())),
        format!("  HASS pathway: {}", academic.hass_pathway),
        String::new(),
        "  (second programs and pathway are not stored between runs)".to_string(),
    ];
    Ok(lines.join("\n"))
}
