//! Server-side rendering of the single page. Each request renders the
//! whole document from a `PageView`; nothing is kept between requests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Error,
}

/// One status line per form, colored by kind.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Ok,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// UI-only projection of a returned source string. The score is a
/// constant; the backend does not report per-source relevance here.
#[derive(Debug, Clone)]
pub struct ResultCard {
    pub id: usize,
    pub text: String,
    pub score: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub document_text: String,
    pub add_text_status: Option<StatusLine>,
    pub upload_status: Option<StatusLine>,
    pub query_text: String,
    pub query_status: Option<StatusLine>,
    pub answer: Option<String>,
    pub results: Vec<ResultCard>,
}

const CSS: &str = "\
body { margin: 0; padding: 2rem; background: #f3f4f6; font-family: sans-serif; color: #1f2937; }
.container { max-width: 42rem; margin: 0 auto; }
h1 { text-align: center; }
section { background: #fff; padding: 1.5rem; margin-bottom: 2rem; border-radius: 0.75rem; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1); }
label { display: block; font-size: 0.875rem; margin-bottom: 0.5rem; }
textarea, input[type=text], input[type=file] { width: 100%; box-sizing: border-box; padding: 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; margin-bottom: 0.5rem; }
button { width: 100%; padding: 0.75rem 1.5rem; font-size: 1.1rem; font-weight: bold; color: #fff; background: #4f46e5; border: none; border-radius: 0.5rem; cursor: pointer; }
button:hover { background: #4338ca; }
.query-form { display: flex; gap: 1rem; align-items: center; }
.query-form button { width: auto; }
.status { margin-top: 0.5rem; font-weight: 600; }
.status.ok { color: #16a34a; }
.status.error { color: #dc2626; }
.divider { text-align: center; color: #6b7280; padding: 1rem 0; }
.answer { padding: 1rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; background: #f9fafb; min-height: 5rem; }
.result { padding: 1rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; margin-bottom: 1rem; }
.result-title { font-weight: 600; margin: 0 0 0.5rem 0; }
.placeholder { color: #6b7280; }
";

pub fn render(view: &PageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Mini RAG Application</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<h1>Mini RAG Application</h1>

<section>
<h2>Add a Document</h2>
<form method="post" action="/add_document">
<label for="documentText">Enter text directly:</label>
<textarea id="documentText" name="text" rows="6" placeholder="Enter the document text here...">{document_text}</textarea>
<button type="submit">Add Document (Text)</button>
</form>
{add_text_status}
<div class="divider">OR</div>
<form method="post" action="/upload_document" enctype="multipart/form-data">
<label for="documentFile">Upload a file (.pdf, .txt, .docx):</label>
<input type="file" id="documentFile" name="file">
<button type="submit">Upload Document (File)</button>
</form>
{upload_status}
</section>

<section>
<h2>Query Documents</h2>
<form method="post" action="/generate_answer" class="query-form">
<input type="text" id="queryText" name="text" placeholder="Enter your query here..." value="{query_text}">
<button type="submit">Search</button>
</form>
{query_status}
</section>

<section>
<h2>LLM Answer</h2>
<div id="llmAnswer" class="answer">
{answer}
</div>
</section>

<section>
<h2>Source Documents</h2>
<div id="searchResults">
{results}
</div>
</section>
</div>
</body>
</html>
"#,
        css = CSS,
        document_text = escape(&view.document_text),
        add_text_status = render_status(view.add_text_status.as_ref()),
        upload_status = render_status(view.upload_status.as_ref()),
        query_text = escape(&view.query_text),
        query_status = render_status(view.query_status.as_ref()),
        answer = render_answer(view.answer.as_deref()),
        results = render_results(&view.results),
    )
}

fn render_status(status: Option<&StatusLine>) -> String {
    match status {
        Some(line) => {
            let class = match line.kind {
                StatusKind::Ok => "status ok",
                StatusKind::Error => "status error",
            };
            format!(r#"<div class="{}">{}</div>"#, class, escape(&line.text))
        }
        None => String::new(),
    }
}

fn render_answer(answer: Option<&str>) -> String {
    match answer {
        Some(answer) => format!("<p>{}</p>", escape(answer)),
        None => r#"<p class="placeholder">Your generated answer will appear here...</p>"#
            .to_string(),
    }
}

fn render_results(results: &[ResultCard]) -> String {
    if results.is_empty() {
        return r#"<p class="placeholder">Source documents will appear here...</p>"#.to_string();
    }

    results
        .iter()
        .map(|card| {
            format!(
                "<div class=\"result\" data-score=\"{}\">\n<p class=\"result-title\">Document {}:</p>\n<p>{}</p>\n</div>",
                card.score,
                card.id,
                escape(&card.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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
