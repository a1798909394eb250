use clap::Parser;
use sci_workload::{analysis, cli, config, error, export, logging, report, workbook};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing::info;
use workbook::{SheetSource, Workbook};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let config = Config::load()?;

    let workbook_path = config.resolve_workbook(cli.workbook.clone());
    let members = config.resolve_members(&cli.members);

    match cli.command {
        Commands::Quality { output, format, worst } => {
            println!("📊 sci-workload - データ品質分析\n");

            println!("[1/3] ブックを読み込み中: {}", workbook_path.display());
            let mut book = Workbook::open(&workbook_path)?;
            let roster = analysis::load_roster(&mut book, &members)?;
            println!(
                "✔ {}シートを読み込み（未検出 {}）\n",
                roster.people.len(),
                roster.missing.len()
            );

            println!("[2/3] 集計中...");
            let quality = analysis::quality_report(&roster);
            println!("✔ 集計完了");

            if format.prints_text() {
                print!("{}", report::render_quality(&quality, &roster.missing, worst));
            }

            if format.writes_json() {
                println!("\n[3/3] 結果を保存中...");
                let target = output.unwrap_or_else(|| config.output_file.clone());
                let written = export::export_quality_json(&quality, &target)?;
                println!("✔ 結果を保存: {}", written.display());
            }

            println!("\n✅ 分析完了");
        }

        Commands::Assignments { top } => {
            let mut book = Workbook::open(&workbook_path)?;
            let roster = analysis::load_roster(&mut book, &members)?;
            let counts = analysis::assignment_counts(&roster);
            print!("{}", report::render_assignments(&counts, &roster.missing, top));
        }

        Commands::Dashboard { sheet, sections } => {
            let sheet = sheet.unwrap_or_else(|| config.dashboard_sheet.clone());
            let mut book = Workbook::open(&workbook_path)?;
            let grid = book.read_sheet(&sheet)?;
            print!("{}", report::render_dashboard(&grid, sections));
        }

        Commands::Sheets { rows, cols } => {
            let mut book = Workbook::open(&workbook_path)?;
            let names = book.sheet_names();
            print!("{}", report::render_sheet_list(&names));

            println!("\n{}", report::rule('=', report::HEAVY_WIDTH));
            println!("SHEET PREVIEWS:");
            println!("{}", report::rule('=', report::HEAVY_WIDTH));
            for name in &names {
                let grid = book.read_sheet(name)?;
                print!("{}", report::render_sheet_preview(&grid, rows, cols));
            }
        }

        Commands::Inspect { sheet, rows, cols, width } => {
            let mut book = Workbook::open(&workbook_path)?;
            let grid = book.read_sheet(&sheet)?;
            print!("{}", report::render_inspect(&grid, rows, cols, width));
        }

        Commands::Config { set_workbook, show } => {
            let mut config = config;

            if let Some(path) = set_workbook {
                config.set_workbook(path)?;
                info!(path = %config.workbook_path.display(), "ブックを設定");
                println!("✔ 既定のブックを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  ブック: {}", config.workbook_path.display());
                println!("  使用するブック: {}", workbook_path.display());
                println!("  名簿: {}", config.team_members.join(", "));
                println!("  出力ファイル: {}", config.output_file.display());
                println!("  ダッシュボードシート: {}", config.dashboard_sheet);
            }
        }
    }

    Ok(())
}
