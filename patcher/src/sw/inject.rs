use super::{HEAD_MARKER, PatchOutcome, SERVICE_WORKER_SNIPPET};

/// Inserts the service worker snippet, followed by a newline, right before the
/// first `</head>`. Later occurrences are left alone, and text without a marker
/// comes back untouched.
///
/// There is no guard against a previous injection: running this on its own
/// output adds a second snippet.
pub fn inject_service_worker(html: &str) -> (String, PatchOutcome) {
    match html.find(HEAD_MARKER) {
        Some(pos) => {
            let mut result = String::with_capacity(html.len() + SERVICE_WORKER_SNIPPET.len() + 1);
            result.push_str(&html[..pos]);
            result.push_str(SERVICE_WORKER_SNIPPET);
            result.push('\n');
            result.push_str(&html[pos..]);
            (result, PatchOutcome::Inserted { offset: pos })
        }
        None => (html.to_string(), PatchOutcome::MarkerMissing),
    }
}

/// Whether `html` already carries the snippet somewhere.
pub fn has_service_worker(html: &str) -> bool {
    html.contains(SERVICE_WORKER_SNIPPET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(before: &str, after: &str) -> String {
        format!("{before}{SERVICE_WORKER_SNIPPET}\n{after}")
    }

    #[test]
    fn snippet_is_a_bare_script_block() {
        assert!(SERVICE_WORKER_SNIPPET.starts_with("<script>\n(function() {\n"));
        assert!(SERVICE_WORKER_SNIPPET.ends_with("})();\n</script>"));
        assert!(SERVICE_WORKER_SNIPPET.contains(
            r#"navigator.serviceWorker.register("/dialogTest/coi-serviceworker.js", {scope: "/dialogTest/"})"#
        ));
        assert_eq!(SERVICE_WORKER_SNIPPET.lines().count(), 16);
    }

    #[test]
    fn snippet_matches_published_registration_script() {
        let expected = concat!(
            "<script>\n",
            "(function() {\n",
            "  if (!(\"serviceWorker\" in navigator)) return;\n",
            "  navigator.serviceWorker.register(\"/dialogTest/coi-serviceworker.js\", {scope: \"/dialogTest/\"})\n",
            "    .then(function(reg) {\n",
            "      if (!reg.active) {\n",
            "        var w = reg.installing || reg.waiting;\n",
            "        if (w) {\n",
            "          w.addEventListener(\"statechange\", function(e) {\n",
            "            if (e.target.state === \"activated\") { window.location.reload(); }\n",
            "          });\n",
            "        }\n",
            "      }\n",
            "    });\n",
            "})();\n",
            "</script>",
        );
        assert_eq!(SERVICE_WORKER_SNIPPET, expected);
    }

    #[test]
    fn inserts_before_head_close() {
        let html = "<html><head><title>x</title></head><body></body></html>";
        let (out, outcome) = inject_service_worker(html);

        assert_eq!(
            out,
            expected("<html><head><title>x</title>", "</head><body></body></html>")
        );
        assert_eq!(outcome, PatchOutcome::Inserted { offset: 28 });
        assert!(outcome.is_inserted());
    }

    #[test]
    fn fragment_without_marker_is_unchanged() {
        let html = "<div><p>no head here</p></div>\n";
        let (out, outcome) = inject_service_worker(html);

        assert_eq!(out, html);
        assert_eq!(outcome, PatchOutcome::MarkerMissing);
    }

    #[test]
    fn empty_input_stays_empty() {
        let (out, outcome) = inject_service_worker("");
        assert!(out.is_empty());
        assert_eq!(outcome, PatchOutcome::MarkerMissing);
    }

    #[test]
    fn only_first_marker_is_used() {
        let html = "<head></head>\n<template><head></head></template>";
        let (out, _) = inject_service_worker(html);

        assert_eq!(
            out,
            expected("<head>", "</head>\n<template><head></head></template>")
        );
        assert_eq!(out.matches(SERVICE_WORKER_SNIPPET).count(), 1);
        assert_eq!(out.matches(HEAD_MARKER).count(), 2);
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let html = "<HTML><HEAD></HEAD></HTML>";
        let (out, outcome) = inject_service_worker(html);

        assert_eq!(out, html);
        assert_eq!(outcome, PatchOutcome::MarkerMissing);
    }

    #[test]
    fn surrounding_bytes_are_preserved() {
        let html = "\u{feff}<head>\r\n  <meta charset=\"utf-8\">\r\n</head>\r\n<body>é</body>";
        let (out, _) = inject_service_worker(html);

        let pos = html.find(HEAD_MARKER).unwrap();
        assert_eq!(out, expected(&html[..pos], &html[pos..]));
    }

    #[test]
    fn second_run_adds_a_second_snippet() {
        let html = "<head></head>";
        let (once, _) = inject_service_worker(html);
        assert!(has_service_worker(&once));

        let (twice, outcome) = inject_service_worker(&once);
        assert!(outcome.is_inserted());
        assert_eq!(twice.matches(SERVICE_WORKER_SNIPPET).count(), 2);
        assert_eq!(
            twice,
            format!("<head>{SERVICE_WORKER_SNIPPET}\n{SERVICE_WORKER_SNIPPET}\n</head>")
        );
    }
}
