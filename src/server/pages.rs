//! Shared helpers for server-rendered HTML pages.

/// Escape HTML special characters to prevent XSS attacks.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Wrap page content in the shared document shell.
pub fn page_layout(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            background: #f5f5f4;
            color: #1c1917;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            line-height: 1.5;
        }}
        main {{
            flex-grow: 1;
        }}
        .card {{
            background: #ffffff;
            border: 1px solid #e7e5e4;
            border-radius: 8px;
            padding: 16px;
            margin: 16px auto;
            max-width: 720px;
        }}
        .card h2 {{
            font-size: 16px;
            margin-bottom: 12px;
        }}
        .field label {{
            display: block;
            font-size: 12px;
            font-weight: 600;
            color: #57534e;
            margin-top: 12px;
        }}
        .field p {{
            font-size: 14px;
            word-break: break-all;
        }}
        .mono {{
            font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
            font-size: 12px;
            color: #44403c;
        }}
        .status-active {{
            color: #16a34a;
            font-weight: 500;
        }}
        .status-inactive {{
            color: #dc2626;
            font-weight: 500;
        }}
        .hero {{
            position: relative;
            height: 240px;
            background: #292524 center / cover no-repeat;
            display: flex;
            align-items: center;
            justify-content: center;
        }}
        .hero h1 {{
            color: #ffffff;
            font-size: 32px;
        }}
        .carousel {{
            display: flex;
            gap: 16px;
            overflow-x: auto;
            padding: 24px;
            max-width: 960px;
            margin: 0 auto;
        }}
        .slide {{
            flex: 0 0 280px;
            background: #ffffff;
            border: 1px solid #e7e5e4;
            border-radius: 8px;
            overflow: hidden;
        }}
        .slide img {{
            width: 100%;
            height: 160px;
            object-fit: cover;
            background: #d6d3d1;
        }}
        .slide .slide-body {{
            padding: 12px;
            font-size: 14px;
        }}
        .notice {{
            max-width: 720px;
            margin: 48px auto;
            padding: 16px;
            text-align: center;
            font-size: 15px;
        }}
    </style>
</head>
<body>
{body}
</body>
</html>"##,
        title = html_escape(title),
        body = body,
    )
}

// =============================================================================
// Tests
// =============================================================================
