use clap::Parser;
use collection_export::cli::{run, Args};
use collection_export::{Color, ExportError, Format};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

const DATABASE: &str = r#"[
    {
        "name": "Llanowar Elves",
        "type_line": "Creature — Elf Druid",
        "mana_cost": "{G}",
        "oracle_text": "{T}: Add {G}.",
        "colors": ["G"],
        "keywords": [],
        "power": "1",
        "toughness": "1",
        "prices": { "usd": "0.25" },
        "legalities": { "standard": "legal", "alchemy": "legal", "brawl": "legal", "standardbrawl": "legal" }
    },
    {
        "name": "Séance",
        "type_line": "Enchantment",
        "mana_cost": "{2}{W}{W}",
        "oracle_text": "At the beginning of each upkeep, you may exile target creature card from your graveyard.",
        "colors": ["W"],
        "keywords": [],
        "prices": { "usd": "1.00" },
        "legalities": { "standard": "not_legal", "alchemy": "not_legal", "brawl": "not_legal", "standardbrawl": "not_legal" }
    },
    {
        "name": "Island",
        "type_line": "Basic Land — Island",
        "mana_cost": "",
        "oracle_text": "({T}: Add {U}.)",
        "colors": [],
        "keywords": [],
        "prices": { "usd": "0.05" },
        "legalities": { "standard": "legal", "alchemy": "legal", "brawl": "legal", "standardbrawl": "legal" }
    },
    {
        "name": "Brazen Borrower // Petty Theft",
        "type_line": "Creature — Faerie Rogue // Instant — Adventure",
        "mana_cost": "{1}{U}{U} // {1}{U}",
        "colors": ["U"],
        "keywords": ["Flash", "Flying"],
        "power": "3",
        "toughness": "1",
        "prices": { "usd": "not-a-price" },
        "legalities": { "standard": "not_legal", "alchemy": "not_legal", "brawl": "legal", "standardbrawl": "not_legal" },
        "card_faces": [
            { "name": "Brazen Borrower", "mana_cost": "{1}{U}{U}", "oracle_text": "Flash\nFlying" },
            { "name": "Petty Theft", "mana_cost": "{1}{U}", "oracle_text": "Return target nonland permanent an opponent controls to its owner's hand." }
        ]
    }
]"#;

const COLLECTION: &str = "Card,Set ID,Set Name,Quantity,Foil
Llanowar Elves,DOM,Dominaria,4,Regular
Seance,GRN,Guilds of Ravnica,1,Regular
Island,ANA,Arena Base Set,4,Regular
Brazen Borrower,ELD,Throne of Eldraine,2,Regular
Black Lotus,LEA,Limited Edition Alpha,1,Regular
";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("oracle-cards.json"), DATABASE).unwrap();
        std::fs::write(dir.path().join("collection.csv"), COLLECTION).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn args(&self, extra: &[&str]) -> Args {
        let database = self.path().join("oracle-cards.json");
        let collection = self.path().join("collection.csv");
        let output = self.path().join("output");
        let mut argv = vec![
            "collection_export".to_string(),
            "--database".to_string(),
            database.to_string_lossy().to_string(),
            "--collection".to_string(),
            collection.to_string_lossy().to_string(),
            "--output-dir".to_string(),
            output.to_string_lossy().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }
}

fn read_output(path: &Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_parse_defaults() {
    let args = Args::try_parse_from(["collection_export"]).unwrap();

    assert_eq!(args.format, None);
    assert!(args.colors.is_empty());
    assert!(args.no_colors.is_empty());
    assert!(!args.exclusive);
    assert!(!args.verbose);
    assert_eq!(args.database, Path::new("oracle-cards.json"));
    assert_eq!(args.collection, Path::new("collection.csv"));
    assert_eq!(args.output_dir, Path::new("output"));
    assert_eq!(args.log_filter(), "warn");
}

#[test]
fn test_parse_filters() {
    let args = Args::try_parse_from([
        "collection_export",
        "--format",
        "standardbrawl",
        "--colors",
        "W",
        "u",
        "--no-colors",
        "N",
        "-e",
        "-v",
    ])
    .unwrap();

    assert_eq!(args.format, Some(Format::StandardBrawl));
    assert_eq!(args.colors, vec![Color::W, Color::U]);
    assert_eq!(args.no_colors, vec![Color::N]);
    assert!(args.exclusive);
    assert!(args.verbose);
    assert_eq!(args.log_filter(), "info");

    let options = args.filter_options();
    assert_eq!(
        options.exclude_colors,
        vec![Color::B, Color::R, Color::G, Color::N]
    );
}

#[test]
fn test_parse_rejects_invalid_format() {
    let err = Args::try_parse_from(["collection_export", "--format", "modern"]).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("modern"));
    assert!(message.contains("standard"));
    assert!(message.contains("standardbrawl"));
}

#[test]
fn test_parse_rejects_unknown_color() {
    assert!(Args::try_parse_from(["collection_export", "--colors", "X"]).is_err());
}

#[test]
fn test_format_from_str() {
    assert_eq!("alchemy".parse::<Format>().unwrap(), Format::Alchemy);

    let err = "vintage".parse::<Format>().unwrap_err();
    assert!(matches!(err, ExportError::InvalidFormat { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid format 'vintage'. Valid formats are: standard, alchemy, brawl, standardbrawl"
    );
}

#[test]
fn test_run_without_filters() {
    let workspace = Workspace::new();

    let outcome = run(&workspace.args(&[])).unwrap();

    assert_eq!(
        outcome.output_path,
        workspace.path().join("output").join("formats-all.json")
    );
    assert_eq!(outcome.report.unmatched, vec!["Black Lotus".to_string()]);

    let records = read_output(&outcome.output_path);
    let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Llanowar Elves", "Seance", "Brazen Borrower"]);

    assert_eq!(records[0]["qty"], "4");
    assert_eq!(
        records[0]["legal_for"],
        serde_json::json!(["standard", "alchemy", "brawl", "standardbrawl"])
    );
    assert!(records[0].get("keyw").is_none());
    assert_eq!(records[1]["legal_for"], serde_json::json!([]));

    let borrower = &records[2];
    assert_eq!(borrower["keyw"], serde_json::json!(["Flash", "Flying"]));
    assert_eq!(borrower["pow"], "3");
    assert_eq!(borrower["tough"], "1");
    assert_eq!(borrower["legal_for"], serde_json::json!(["brawl"]));

    // 4 * 0.25 + 1 * 1.00 + 4 * 0.05 (island omitted but counted), borrower has no usable price
    assert!((outcome.report.total_value - 2.2).abs() < 1e-9);
}

#[test]
fn test_run_with_format_filter() {
    let workspace = Workspace::new();

    let outcome = run(&workspace.args(&["--format", "standard"])).unwrap();

    assert_eq!(
        outcome.output_path,
        workspace.path().join("output").join("format-standard.json")
    );
    let records = read_output(&outcome.output_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Llanowar Elves");
    assert!(records[0].get("legal_for").is_none());
}

#[test]
fn test_run_exclusive_colors() {
    let workspace = Workspace::new();

    let outcome = run(&workspace.args(&["--colors", "W", "U", "-e"])).unwrap();

    assert_eq!(
        outcome.output_path,
        workspace
            .path()
            .join("output")
            .join("formats-all.include-W-U.exclude-B-R-G-N.json")
    );
    let records = read_output(&outcome.output_path);
    let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Seance", "Brazen Borrower"]);
    assert!((outcome.report.total_value - 1.0).abs() < 1e-9);
}

#[test]
fn test_run_missing_database() {
    let workspace = Workspace::new();
    std::fs::remove_file(workspace.path().join("oracle-cards.json")).unwrap();

    let result = run(&workspace.args(&[]));

    assert!(matches!(result, Err(ExportError::Io { .. })));
    assert!(!workspace.path().join("output").exists());
}

#[test]
fn test_run_survives_broken_collection_row() {
    let workspace = Workspace::new();
    std::fs::write(
        workspace.path().join("collection.csv"),
        "Card,Set,Quantity\nLlanowar Elves,DOM,4\nBroken Row\n",
    )
    .unwrap();

    let outcome = run(&workspace.args(&[])).unwrap();

    let records = read_output(&outcome.output_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Llanowar Elves");
    assert!((outcome.report.total_value - 1.0).abs() < 1e-9);
}
