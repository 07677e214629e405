use anyhow::Result;
use coursely_application::ProfileEditor;
use coursely_core::field::FieldId;

/// Drives one edit session to commit, as the profile page would.
pub fn run(
    editor: &mut ProfileEditor,
    field: FieldId,
    value: &str,
    secondary: bool,
    select: bool,
) -> Result<()> {
    editor.begin_edit(field);

    match (secondary, select) {
        (false, false) => editor.on_primary_input(value)?,
        (false, true) => editor.select_primary(value)?,
        (true, false) => editor.on_secondary_input(value)?,
        (true, true) => editor.select_secondary(value)?,
    }

    if let Some(session) = editor.session() {
        let candidates = if secondary {
            session.secondary_candidates()
        } else {
            session.primary_candidates()
        };
        if !candidates.is_empty() {
            println!("Matches: {}", candidates.join(", "));
        }
    }

    if let Err(e) = editor.commit() {
        editor.cancel()?;
        anyhow::bail!("{field}: {e}");
    }

    println!("{}", commit_notice(field));
    Ok(())
}

/// What a successful commit of `field` amounts to once the process exits.
fn commit_notice(field: FieldId) -> String {
    if field.is_persisted() {
        format!("Saved {field}.")
    } else {
        format!("Accepted {field} for this run only; it is not stored between runs.")
    }
}
