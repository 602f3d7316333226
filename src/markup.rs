//! Static markup templates, isolated as pure formatting functions.
//!
//! Payload fragments are trusted host-supplied HTML; no escaping happens
//! here. The newline substitution exists so multi-line solutions render with
//! explicit break markers inside the collapsed `<details>` block.

/// Insert a `new-line` marker after every newline and after the opening of
/// the first `<code>` block.
#[must_use]
pub fn hint_fragment(raw: &str) -> String {
    raw.replace('\n', "\n<span class=\"new-line\"></span>")
        .replacen("<code>", "<code><span class=\"new-line\"></span>", 1)
}

/// The collapsible hint panel. Rendered open; visibility is controlled by
/// the gate, not by the `<details>` state.
#[must_use]
pub fn hint_section(fragment: &str) -> String {
    format!(
        "<section id=\"hint\">\n  \
           <details open>\n  \
             <summary class=\"hint__toggle\">Hint:</summary>\n  \
             {fragment}\n  \
           </details>\n\
         </section>\n"
    )
}

/// The teacher-facing editor: one textarea per synced field.
#[must_use]
pub fn teacher_editor_section() -> &'static str {
    "<section id=\"teacher_editor\">\n  \
       <p>Assertions</p>\n  \
       <textarea class=\"editor\" id=\"assertions_editor\"></textarea>\n  \
       <p>Hint</p>\n  \
       <textarea class=\"editor\" id=\"hint_editor\"></textarea>\n\
     </section>\n"
}

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;
