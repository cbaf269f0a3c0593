//! Integration tests for portfolio CLI commands.

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use portfolio_cli::{
        cli::Cli,
        commands::{self, validate},
    };
    use portfolio_shared::Portfolio;
    use tempfile::TempDir;

    fn write_assets(root: &Path, portfolio: &Portfolio) {
        for asset in portfolio.asset_paths() {
            let path = root.join(asset);
            fs::create_dir_all(path.parent().expect("asset has parent")).expect("create dir");
            fs::write(&path, b"img").expect("write asset");
        }
    }

    fn run_cli(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args).expect("parse args");
        let mut out = Vec::new();
        commands::run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn validate_passes_with_all_assets_present() {
        let site = TempDir::new().expect("create temp dir");
        let portfolio = Portfolio::embedded().expect("embedded content");
        write_assets(site.path(), &portfolio);

        let report = validate::run(None, Some(site.path()), true).expect("validate");
        assert_eq!(report.projects, 4);
        assert_eq!(report.assets_found, 5);
        assert!(report.missing_assets.is_empty());
    }

    #[test]
    fn validate_warns_on_missing_asset_unless_strict() {
        let site = TempDir::new().expect("create temp dir");
        let portfolio = Portfolio::embedded().expect("embedded content");
        write_assets(site.path(), &portfolio);
        fs::remove_file(site.path().join("static/earthly.png")).expect("remove asset");

        let report = validate::run(None, Some(site.path()), false).expect("lenient validate");
        assert_eq!(report.missing_assets, vec![site.path().join("static/earthly.png")]);
        assert_eq!(report.assets_found, 4);

        let err = validate::run(None, Some(site.path()), true).expect_err("strict validate");
        assert!(err.to_string().contains("1 referenced asset(s) missing"));
    }

    #[test]
    fn validate_rejects_bad_content_file() {
        let dir = TempDir::new().expect("create temp dir");
        let mut value =
            serde_json::to_value(Portfolio::embedded().expect("embedded content")).expect("json");
        value["connect"]["links"][0]["href"] = "ftp://example.com".into();
        let path = dir.path().join("portfolio.json");
        fs::write(&path, value.to_string()).expect("write content");

        let err = validate::run(Some(path.as_path()), None, false).expect_err("invalid link");
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid content in"), "{chain}");
        assert!(chain.contains("ftp://example.com"), "{chain}");
    }

    #[test]
    fn export_emits_parseable_json() {
        let output = run_cli(&["portfolio-cli", "export", "--pretty"]).expect("export");
        let exported = Portfolio::from_json(&output).expect("exported content parses");
        assert_eq!(exported, Portfolio::embedded().expect("embedded content"));
    }

    #[test]
    fn sections_lists_nav_anchors() {
        let output = run_cli(&["portfolio-cli", "sections"]).expect("sections");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("About") && lines[0].ends_with("#about"));
        assert!(lines[3].ends_with("#connect"));
        assert_eq!(lines[4], "nav offset: 128px");
    }

    #[test]
    fn sections_resolves_single_label() {
        let output =
            run_cli(&["portfolio-cli", "sections", "--label", "projects"]).expect("resolve");
        assert_eq!(output.trim(), "#projects");

        assert!(run_cli(&["portfolio-cli", "sections", "--label", "blog"]).is_err());
    }
}
