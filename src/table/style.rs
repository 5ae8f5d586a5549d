/// Inline stylesheet shipped with every comparison table
pub const STYLESHEET: &str = r#"<style>
    table {
        width: 100%;
        table-layout: fixed;
        border-collapse: collapse;
    }
    th, td {
        border: 1px solid #444;
        padding: 8px;
        vertical-align: top;
    }
    th {
        background-color: #222;
        color: #eee;
    }
    td {
        width: 50%;
        word-break: break-word;
        background-color: #181818;
        color: #eee;
    }
    pre.dark-pre {
        background-color: #23272e;
        color: #eee;
        border-radius: 4px;
        padding: 8px;
        font-size: 13px;
        font-family: 'Fira Mono', 'Consolas', 'Monaco', monospace;
        white-space: pre-wrap;
    }
    ul {
        margin: 0 0 0 20px;
        padding: 0;
    }
    li {
        margin-bottom: 4px;
    }
    strong {
        color: #7cb4ff;
    }
    em {
        color: #ffb47c;
    }
</style>"#;
