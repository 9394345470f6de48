//! Upload page: view state and HTML rendering
//!
//! The page is server-rendered. [`PageState`] holds everything the page
//! shows and every user action is a transition on it. Transitions that make
//! no sense from the current state leave it unchanged.
//!
//! A browser never re-sends a file across page loads, so a `Done` page only
//! remembers the previous file's name. Resubmitting means picking a file
//! again, which moves the page back to `FileSelected`.

use std::fmt::Write;

use translateai_blob::StoredObject;
use translateai_pipeline::PipelineResult;

use crate::access::AuthResult;

const TITLE: &str = "TranslateIA";
const DESCRIPTION: &str = "Translate your audio and video files from english to spanish";
const ACCEPTED_EXTENSIONS: [&str; 2] = ["mp3", "mp4"];
const SUBMIT_LABEL: &str = "Continuar";
const SUBMITTING_LABEL: &str = "Cargando";
const ERROR_PREFIX: &str = "Ha ocurrido un error: ";
const DENIED_NOTICE: &str = "Usuario o contraseña incorrectos";

/// A file the user picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Whether the name has one of the suggested extensions
    ///
    /// The filter is advisory: non-matching files are still accepted.
    pub matches_filter: bool,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let matches_filter = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)));

        Self { name, matches_filter }
    }
}

/// Result shown below the upload form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Nothing submitted yet
    Idle,
    Ok(StoredObject),
    Err(String),
}

impl From<PipelineResult> for FormState {
    fn from(result: PipelineResult) -> Self {
        match result {
            PipelineResult::Completed { output } => Self::Ok(output),
            PipelineResult::Failed { message } => Self::Err(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Unauthenticated {
        notice: Option<String>,
    },
    NoFileSelected,
    FileSelected(SelectedFile),
    Submitting(SelectedFile),
    Done {
        /// `None` when the submission reached the server without a file
        file: Option<SelectedFile>,
        form: FormState,
    },
}

impl Default for PageState {
    fn default() -> Self {
        Self::Unauthenticated { notice: None }
    }
}

impl PageState {
    #[must_use]
    pub fn authenticate(self, result: &AuthResult) -> Self {
        if !matches!(self, Self::Unauthenticated { .. }) {
            return self;
        }

        match result {
            AuthResult::Granted => Self::NoFileSelected,
            AuthResult::Denied => Self::Unauthenticated {
                notice: Some(DENIED_NOTICE.to_string()),
            },
            AuthResult::Errored(message) => Self::Unauthenticated {
                notice: Some(format!("{ERROR_PREFIX}{message}")),
            },
        }
    }

    #[must_use]
    pub fn select_file(self, name: &str) -> Self {
        match self {
            Self::Unauthenticated { .. } | Self::Submitting(_) => self,
            Self::NoFileSelected | Self::FileSelected(_) | Self::Done { .. } => {
                Self::FileSelected(SelectedFile::new(name))
            }
        }
    }

    #[must_use]
    pub fn submit(self) -> Self {
        match self {
            Self::FileSelected(file) => Self::Submitting(file),
            other => other,
        }
    }

    /// Apply the controller's verdict
    ///
    /// Besides the usual `Submitting` source, a `NoFileSelected` page may
    /// complete too: a form posted without a file still gets an answer.
    #[must_use]
    pub fn complete(self, result: PipelineResult) -> Self {
        match self {
            Self::Submitting(file) => Self::Done {
                file: Some(file),
                form: result.into(),
            },
            Self::NoFileSelected => Self::Done {
                file: None,
                form: result.into(),
            },
            other => other,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated { .. })
    }

    /// Only a file picked in this page load can be posted
    pub const fn submit_enabled(&self) -> bool {
        matches!(self, Self::FileSelected(_))
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            Self::FileSelected(file) | Self::Submitting(file) | Self::Done { file: Some(file), .. } => Some(file),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Done {
                form: FormState::Err(message),
                ..
            } => Some(format!("{ERROR_PREFIX}{message}")),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut body = String::new();

        match self {
            Self::Unauthenticated { notice } => render_login(&mut body, notice.as_deref()),
            Self::Done {
                form: FormState::Ok(output),
                ..
            } => render_download(&mut body, output),
            _ => render_upload(&mut body, self),
        }

        if let Some(banner) = self.banner() {
            let _ = write!(body, r#"<section class="banner" role="alert"><p>{}</p></section>"#, escape_html(&banner));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{DESCRIPTION}">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<p class="brand">Translate<b>AI</b></p>
{body}
</main>
<script>{SCRIPT}</script>
</body>
</html>
"#
        )
    }
}

fn render_login(out: &mut String, notice: Option<&str>) {
    out.push_str(
        r#"<form method="post" action="/" class="login">
<input type="text" name="name" placeholder="Usuario" autocomplete="username" required>
<input type="password" name="password" placeholder="Contraseña" autocomplete="current-password" required>
"#,
    );
    let _ = writeln!(out, r#"<button type="submit">{SUBMIT_LABEL}</button>"#);
    out.push_str("</form>\n");

    if let Some(notice) = notice {
        let _ = writeln!(out, r#"<p class="notice">{}</p>"#, escape_html(notice));
    }
}

fn render_upload(out: &mut String, state: &PageState) {
    out.push_str(r#"<form method="post" action="/upload" enctype="multipart/form-data" id="upload">"#);
    out.push('\n');

    match state {
        PageState::FileSelected(file) | PageState::Submitting(file) => {
            let _ = write!(
                out,
                r#"<section class="selected"><p>Archivo seleccionado:</p><p id="selected-name">{}</p>"#,
                escape_html(&file.name)
            );
            if !file.matches_filter {
                out.push_str(r#"<p class="hint">(.mp3, .mp4)</p>"#);
            }
            out.push_str("</section>\n");
        }
        _ => {
            out.push_str(r#"<label for="file" class="picker"><p>Selecciona un archivo</p><p class="hint">(.mp3, .mp4)</p>"#);
            if let Some(previous) = state.selected_file() {
                let _ = write!(out, r#"<p class="hint">Último archivo: {}</p>"#, escape_html(&previous.name));
            }
            out.push_str("</label>\n");
        }
    }

    out.push_str(r#"<input type="file" name="file" id="file" accept=".mp3,.mp4" hidden>"#);
    out.push('\n');

    let submitting = matches!(state, PageState::Submitting(_));
    let label = if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL };
    let disabled = if state.submit_enabled() { "" } else { " disabled" };
    let _ = writeln!(out, r#"<button type="submit" id="submit"{disabled}>{label}</button>"#);

    out.push_str("</form>\n");
}

fn render_download(out: &mut String, output: &StoredObject) {
    let _ = writeln!(
        out,
        r#"<section class="download"><p>{}</p><a href="{}" download>Descargar</a></section>"#,
        escape_html(&output.name),
        escape_html(&output.url)
    );
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif;color:#09090b}\
main{min-height:100vh;display:flex;flex-direction:column;gap:2.5rem;justify-content:center;align-items:center;text-align:center;padding:1.25rem 2.5rem}\
.brand{font-size:1.875rem}\
form{display:flex;flex-direction:column;gap:1rem;width:100%;max-width:24rem}\
.picker{aspect-ratio:1;border:2px dashed #d4d4d8;border-radius:.75rem;display:flex;flex-direction:column;justify-content:center;cursor:pointer}\
.hint{font-size:.875rem;color:#71717a}\
.selected{font-size:.75rem;border:1px solid #d4d4d8;border-radius:.5rem;padding:.625rem}\
.download{font-size:.75rem;display:flex;justify-content:space-between;align-items:center;width:100%;max-width:24rem;border-radius:.5rem;background:#09090b;color:#fafafa;padding:.625rem}\
.download a{color:#fafafa}\
button{padding:.625rem;border-radius:.5rem;background:#09090b;color:#fafafa;border:0}\
button:disabled{opacity:.5}\
.banner{position:fixed;bottom:1.25rem;border:2px solid #f87171;background:#fecaca;color:#450a0a;border-radius:.5rem;padding:.625rem 1.25rem}\
.notice{color:#b91c1c}";

const SCRIPT: &str = "(function(){\
var input=document.getElementById('file'),button=document.getElementById('submit'),form=document.getElementById('upload');\
if(!input||!form)return;\
input.addEventListener('change',function(){\
var file=input.files[0];if(!file)return;\
var name=document.getElementById('selected-name');\
if(name){name.textContent=file.name;}else{var label=document.querySelector('.picker');if(label){label.innerHTML='<p>Archivo seleccionado:</p><p></p>';label.lastChild.textContent=file.name;}}\
button.disabled=false;});\
form.addEventListener('submit',function(){button.disabled=true;button.textContent='Cargando';});\
})();";
