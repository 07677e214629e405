use coursely_application::ProfileEditor;
use coursely_core::catalog::ProgramKind;

pub fn run(editor: &ProfileEditor, program: &str, minor: bool) {
    let kind = if minor {
        ProgramKind::Minor
    } else {
        ProgramKind::Major
    };

    let tracks = editor.catalog().tracks_for(program, kind);
    if tracks.is_empty() {
        println!("No tracks for {program} ({kind}).");
    }
    for track in tracks {
        println!("{track}");
    }
}
