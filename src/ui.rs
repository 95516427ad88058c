use crate::models::AnalysisResult;

pub fn render_index() -> String {
    INDEX_HTML.replace("{{STYLE}}", STYLE)
}

/// Server-rendered upload page, with counts once a file was posted.
pub fn render_home(result: Option<&AnalysisResult>) -> String {
    let stats = result.map(render_fragment).unwrap_or_default();
    HOME_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{STATS}}", &stats)
}

/// Markup returned by `/embedded`, meant to be injected into a container.
pub fn render_fragment(result: &AnalysisResult) -> String {
    // filename last so placeholders inside it stay literal
    FRAGMENT_HTML
        .replace("{{LINES}}", &result.lines.to_string())
        .replace("{{WORDS}}", &result.words.to_string())
        .replace("{{BYTES}}", &result.bytes.to_string())
        .replace("{{CHARS}}", &result.chars.to_string())
        .replace("{{MODE}}", &escape_html(&result.mode))
        .replace("{{FILENAME}}", &escape_html(&result.filename))
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const FRAGMENT_HTML: &str = r#"<section class="stats" data-mode="{{MODE}}">
  <h2>{{FILENAME}}</h2>
  <div class="panel">
    <div class="stat"><span class="label">Mode</span><span class="value">{{MODE}}</span></div>
    <div class="stat"><span class="label">Lines</span><span class="value">{{LINES}}</span></div>
    <div class="stat"><span class="label">Words</span><span class="value">{{WORDS}}</span></div>
    <div class="stat"><span class="label">Bytes</span><span class="value">{{BYTES}}</span></div>
    <div class="stat"><span class="label">Chars</span><span class="value">{{CHARS}}</span></div>
  </div>
</section>"#;

const STYLE: &str = r#"
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    form, .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
      overflow-wrap: anywhere;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }
"#;

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Word Count</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <h1>Word Count</h1>
    <form method="post" action="/home" enctype="multipart/form-data">
      <input type="file" name="file" />
      <button type="submit">Count</button>
    </form>
    {{STATS}}
  </main>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Word Count</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <h1>Word Count</h1>
    <div class="controls">
      <input type="file" id="file" />
      <select id="status">
        <option value="api">api</option>
        <option value="embedded">embedded</option>
      </select>
      <button type="button" id="send">Send</button>
    </div>
    <div class="panel">
      <div class="stat"><span class="label">Mode</span><span class="value" id="mode">API</span></div>
      <div class="stat"><span class="label">File</span><span class="value" id="filename"></span></div>
      <div class="stat"><span class="label">Lines</span><span class="value" id="lines"></span></div>
      <div class="stat"><span class="label">Words</span><span class="value" id="words"></span></div>
      <div class="stat"><span class="label">Bytes</span><span class="value" id="bytes"></span></div>
      <div class="stat"><span class="label">Chars</span><span class="value" id="chars"></span></div>
    </div>
    <div id="container"></div>
  </main>

  <script>
    const BASE_URL = window.location.origin;
    const FIELDS = ['mode', 'filename', 'lines', 'words', 'bytes', 'chars'];

    const fileInput = document.getElementById('file');
    const selector = document.getElementById('status');
    const modeEl = document.getElementById('mode');
    const container = document.getElementById('container');
    const fields = Object.fromEntries(FIELDS.map((key) => [key, document.getElementById(key)]));

    class SubmitError extends Error {
      constructor(kind, message) {
        super(message);
        this.kind = kind;
      }
    }

    const submit = async () => {
      const file = fileInput.files[0];
      if (!file) {
        throw new SubmitError('NoFileSelected', 'no file selected');
      }

      const mode = selector.value === 'embedded' ? 'embedded' : 'api';
      const form = new FormData();
      form.append('file', file);

      let response;
      try {
        response = await fetch(BASE_URL + '/' + mode, { method: 'POST', body: form, cache: 'no-store' });
      } catch (err) {
        throw new SubmitError('RequestFailed', err.message);
      }
      if (!response.ok) {
        throw new SubmitError('RequestFailed', 'HTTP ' + response.status);
      }

      if (mode === 'api') {
        let data;
        try {
          data = await response.json();
        } catch (err) {
          throw new SubmitError('MalformedResponse', err.message);
        }
        if (typeof data !== 'object' || data === null) {
          throw new SubmitError('MalformedResponse', 'expected a JSON object');
        }
        const missing = FIELDS.filter((key) => !(key in data));
        if (missing.length > 0) {
          throw new SubmitError('MalformedResponse', 'missing ' + missing.join(', '));
        }
        FIELDS.forEach((key) => {
          fields[key].textContent = data[key];
        });
      } else {
        container.innerHTML = await response.text();
      }
    };

    document.getElementById('send').addEventListener('click', () => {
      submit().catch((err) => {
        modeEl.textContent = 'ERROR ' + (err.kind || 'RequestFailed') + ': ' + err.message;
      });
    });

    selector.addEventListener('change', () => {
      modeEl.textContent = selector.value.toUpperCase();
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            mode: "EMBEDDED".to_string(),
            filename: "<b>notes</b>.txt".to_string(),
            lines: 3,
            words: 7,
            bytes: 40,
            chars: 38,
        }
    }

    #[test]
    fn fragment_escapes_filename() {
        let html = render_fragment(&sample());
        assert!(html.contains("&lt;b&gt;notes&lt;/b&gt;.txt"));
        assert!(!html.contains("<b>notes"));
        assert!(html.contains(">7<"));
        assert!(html.contains(">38<"));
    }

    #[test]
    fn home_without_result_has_no_stats() {
        let html = render_home(None);
        assert!(html.contains(r#"action="/home""#));
        assert!(!html.contains("class=\"stats\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn index_has_every_display_target() {
        let html = render_index();
        for id in ["file", "status", "send", "mode", "filename", "lines", "words", "bytes", "chars", "container"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
    }

    #[test]
    fn index_script_rejects_non_object_json_before_key_lookup() {
        let html = render_index();
        let guard = html
            .find("typeof data !== 'object' || data === null")
            .expect("object guard");
        let lookup = html.find("!(key in data)").expect("key lookup");
        assert!(guard < lookup);
        assert!(html[guard..lookup].contains("'MalformedResponse'"));
    }
}
