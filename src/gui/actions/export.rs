// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.scored.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Export: Begin group={}, rows={}, type={:?}",
        app.state.options.eval.group,
        app.scored.len(),
        export.export_type
    );

    let msg = match file::export_scores(export, &app.scored) {
        Ok(paths) => match paths.last() {
            Some(last) if paths.len() == 1 => format!("Exported to {}", last.display()),
            Some(last) => format!("Exported {} files. Last: {}", paths.len(), last.display()),
            None => s!("Nothing exported"),
        },
        Err(e) => format!("Export error: {e}"),
    };
    app.status(msg);
}
