use coursely_application::ProfileEditor;
use coursely_core::catalog::ProgramKind;
use coursely_core::search;

use super::ListKind;

pub fn run(editor: &ProfileEditor, list: ListKind, query: &str) {
    let catalog = editor.catalog();
    let names = match list {
        ListKind::Major => catalog.names_for(ProgramKind::Major),
        ListKind::Minor => catalog.names_for(ProgramKind::Minor),
        ListKind::Pathway => catalog.list_pathway_names(),
    };

    let matches = search::filter(&names, query);
    if matches.is_empty() {
        println!("No matches for \"{query}\".");
    }
    for name in matches {
        println!("{name}");
    }
}
