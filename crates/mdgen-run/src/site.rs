use std::fs;
use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use miette::miette;
use rayon::prelude::*;

use mdgen_markdown::{extract_title, to_html};

/// Removes any stale output tree and recreates an empty destination
/// directory, so a run never mixes old and new pages.
pub fn clean_output(destination: &Path) -> miette::Result<()> {
    if destination.exists() {
        fs::remove_dir_all(destination).into_diagnostic()?;
    }
    fs::create_dir_all(destination).into_diagnostic()?;

    Ok(())
}

/// Recursively copies every entry under `source` into `destination`,
/// creating directories as needed.
pub fn copy_static(source: &Path, destination: &Path) -> miette::Result<()> {
    fs::create_dir_all(destination).into_diagnostic()?;

    for entry in fs::read_dir(source).into_diagnostic()? {
        let entry = entry.into_diagnostic()?;
        let source_path = entry.path();
        let destination_path = destination.join(entry.file_name());

        tracing::info!(
            "copying: {} -> {}",
            source_path.display(),
            destination_path.display()
        );

        if source_path.is_dir() {
            copy_static(&source_path, &destination_path)?;
        } else {
            fs::copy(&source_path, &destination_path).into_diagnostic()?;
        }
    }

    Ok(())
}

/// Renders a single markdown file through the template and writes the page.
/// A parse failure aborts this page before anything is written.
pub fn generate_page(source: &Path, template: &str, destination: &Path) -> miette::Result<()> {
    tracing::info!(
        "generating page: {} -> {}",
        source.display(),
        destination.display()
    );

    let markdown = fs::read_to_string(source).into_diagnostic()?;
    let body = to_html(&markdown).map_err(|e| miette!("{}: {}", source.display(), e))?;
    let title = extract_title(&markdown).map_err(|e| miette!("{}: {}", source.display(), e))?;

    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &body);

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    fs::write(destination, page).into_diagnostic()?;

    Ok(())
}

/// Walks the content tree and renders every markdown file into its mirrored
/// output path. Pages are independent, so generation switches to rayon once
/// the job count exceeds `parallel_threshold`.
pub fn generate_pages(
    content: &Path,
    template: &str,
    destination: &Path,
    parallel_threshold: usize,
) -> miette::Result<()> {
    let pages = collect_pages(content, destination)?;

    if pages.len() > parallel_threshold {
        pages
            .par_iter()
            .try_for_each(|(source, destination)| generate_page(source, template, destination))
    } else {
        pages
            .iter()
            .try_for_each(|(source, destination)| generate_page(source, template, destination))
    }
}

fn collect_pages(content: &Path, destination: &Path) -> miette::Result<Vec<(PathBuf, PathBuf)>> {
    let mut pages = Vec::new();

    for entry in fs::read_dir(content).into_diagnostic()? {
        let entry = entry.into_diagnostic()?;
        let path = entry.path();

        if path.is_dir() {
            pages.extend(collect_pages(&path, &destination.join(entry.file_name()))?);
        } else if path.extension().is_some_and(|extension| extension == "md") {
            let page = destination.join(entry.file_name()).with_extension("html");
            pages.push((path, page));
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const TEMPLATE: &str = "<html><head><title>{{ Title }}</title></head>\
                            <body>{{ Content }}</body></html>";

    #[test]
    fn test_clean_output_purges_stale_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("public");
        fs::create_dir_all(output.join("old")).unwrap();
        fs::write(output.join("old/stale.html"), "stale").unwrap();

        clean_output(&output).unwrap();

        assert!(output.is_dir());
        assert!(!output.join("old").exists());
    }

    #[test]
    fn test_copy_static_recurses() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("static");
        let destination = dir.path().join("public");
        fs::create_dir_all(source.join("css")).unwrap();
        fs::write(source.join("index.css"), "body {}").unwrap();
        fs::write(source.join("css/extra.css"), "p {}").unwrap();

        copy_static(&source, &destination).unwrap();

        assert_eq!(
            fs::read_to_string(destination.join("index.css")).unwrap(),
            "body {}"
        );
        assert_eq!(
            fs::read_to_string(destination.join("css/extra.css")).unwrap(),
            "p {}"
        );
    }

    #[test]
    fn test_generate_page_substitutes_template() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("page.md");
        let destination = dir.path().join("public/nested/page.html");
        fs::write(&source, "# A Title\n\nSome **bold** text.").unwrap();

        generate_page(&source, TEMPLATE, &destination).unwrap();

        let page = fs::read_to_string(&destination).unwrap();
        assert_eq!(
            page,
            "<html><head><title>A Title</title></head>\
             <body><div><h1>A Title</h1><p>Some <b>bold</b> text.</p></div></body></html>"
        );
    }

    #[test]
    fn test_generate_page_without_title_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("page.md");
        let destination = dir.path().join("public/page.html");
        fs::write(&source, "no heading here").unwrap();

        let result = generate_page(&source, TEMPLATE, &destination);

        assert!(result.is_err());
        assert!(!destination.exists());
    }

    #[test]
    fn test_generate_pages_mirrors_content_tree() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let output = dir.path().join("public");
        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(content.join("index.md"), "# Home").unwrap();
        fs::write(content.join("blog/post.md"), "# Post").unwrap();
        fs::write(content.join("notes.txt"), "not a page").unwrap();

        generate_pages(&content, TEMPLATE, &output, 10).unwrap();

        assert!(output.join("index.html").is_file());
        assert!(output.join("blog/post.html").is_file());
        assert!(!output.join("notes.txt").exists());
        assert!(!output.join("notes.html").exists());
    }

    #[test]
    fn test_generate_pages_parallel_matches_serial() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let output = dir.path().join("public");
        fs::create_dir_all(&content).unwrap();
        for i in 0..12 {
            fs::write(
                content.join(format!("page{}.md", i)),
                format!("# Page {}", i),
            )
            .unwrap();
        }

        // Threshold of zero forces the rayon path.
        generate_pages(&content, TEMPLATE, &output, 0).unwrap();

        for i in 0..12 {
            let page = fs::read_to_string(output.join(format!("page{}.html", i))).unwrap();
            assert!(page.contains(&format!("<h1>Page {}</h1>", i)));
        }
    }
}
