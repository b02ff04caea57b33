use anyhow::{anyhow, Result};
use chrono::Local;

use crate::config::AppConfig;
use crate::services::{
    build_training_table, filter_and_sort, train_from_table, write_training_table, Ledger,
    PredictionEngine, ProbabilitySort, RollingFormCalculator, TrainingOptions, AVAILABLE_LEAGUES,
};
use crate::utils::validate_team_name;

fn load_ledger(config: &AppConfig) -> Result<Ledger> {
    if !config.ledger_path.exists() {
        return Err(anyhow!(
            "Ledger not found at {}. Run the results scraper first.",
            config.ledger_path.display()
        ));
    }
    Ledger::from_csv_path(&config.ledger_path)
}

pub fn build_features(config: &AppConfig) -> Result<()> {
    println!("📥 Loading ledger from {}...", config.ledger_path.display());
    let ledger = load_ledger(config)?;
    println!("   {} games loaded", ledger.len());

    let calculator = RollingFormCalculator::new(config.rolling_window);
    println!("🧮 Computing rolling form (window {})...", calculator.window());
    let rows = build_training_table(&ledger, &calculator);

    if rows.is_empty() {
        println!(
            "📭 No game had {} prior games for both teams. Nothing written.",
            calculator.window()
        );
        return Ok(());
    }

    write_training_table(&rows, &config.features_path)?;
    println!(
        "✅ Wrote {} training rows to {}",
        rows.len(),
        config.features_path.display()
    );
    Ok(())
}

pub fn train(config: &AppConfig) -> Result<()> {
    println!("🏋️  Training over/under model from {}...", config.features_path.display());

    let report = train_from_table(
        &config.features_path,
        &config.model_path,
        &TrainingOptions::default(),
        config.rolling_window,
    )?;

    println!("📊 Evaluation on {} held-out games:", report.test_rows);
    println!("   Accuracy: {:.1}%", report.accuracy * 100.0);
    match report.roc_auc {
        Some(auc) => println!("   ROC AUC:  {:.3}", auc),
        None => println!("   ROC AUC:  n/a (single class in test split)"),
    }
    println!("✅ Model saved to {}", config.model_path.display());
    Ok(())
}

pub async fn generate_predictions(config: &AppConfig, league: Option<&str>) -> Result<()> {
    let engine = PredictionEngine::from_config(config);

    let predictions = match league {
        Some(code) => {
            let (_, sport_key) = AVAILABLE_LEAGUES
                .iter()
                .find(|(c, _)| c.eq_ignore_ascii_case(code))
                .ok_or_else(|| {
                    anyhow!("Unsupported league: {}. Use NCAAB, NBA or WNBA", code)
                })?;
            println!("🔮 Generating {} predictions...", code.to_uppercase());
            engine.generate_predictions(config, sport_key).await?
        }
        None => {
            println!("🔮 Generating predictions for all leagues...");
            engine.predict_all_leagues(config).await
        }
    };

    if predictions.is_empty() {
        println!("📭 No predictions could be generated. Check the logs for skipped games.");
        return Ok(());
    }

    let predictions = filter_and_sort(predictions, None, ProbabilitySort::HighestFirst);

    println!("\n🎯 {} predictions:\n", predictions.len());
    println!("{:<6} {:<50} {:<14} {:>6}", "League", "Match", "Prediction", "Prob");
    for p in &predictions {
        println!(
            "{:<6} {:<50} {:<14} {:>5.1}%",
            p.league,
            p.matchup,
            p.prediction,
            p.probability * 100.0
        );
    }

    Ok(())
}

pub fn query_team(config: &AppConfig, team_name: &str) -> Result<()> {
    if !validate_team_name(team_name) {
        println!("❌ Invalid team name: '{}'", team_name);
        return Ok(());
    }

    let ledger = load_ledger(config)?;
    let engine = PredictionEngine::from_config(config);

    println!("🔍 Searching for team: {}", team_name);
    let report = engine.team_form(&ledger, team_name, Local::now().date_naive(), 5);

    if report.window.games == 0 {
        println!("❌ No games found for '{}' (key '{}')", team_name, report.team_key);

        let suggestions = ledger.suggest_teams(team_name, 5);
        if !suggestions.is_empty() {
            println!("\n💡 Did you mean:");
            for name in suggestions {
                println!("   • {}", name);
            }
        }
        return Ok(());
    }

    println!("📊 Team Form:");
    println!(
        "   Lookup key: {}{}",
        report.team_key,
        if report.guessed { " (guessed from first word)" } else { "" }
    );
    println!(
        "   Last {} games (window {}):",
        report.window.games,
        engine.calculator().window()
    );
    println!("   Avg margin: {:+.1}", report.window.margin_of_victory);
    println!("   Avg points for: {:.1}", report.window.points_for);
    println!("   Avg points against: {:.1}", report.window.points_against);
    println!("   Over hit rate: {:.1}%", report.window.ou_hit_rate * 100.0);
    if report.full_window.is_none() {
        println!(
            "   ⚠️  Fewer than {} games by exact key; no training row would use this team yet",
            engine.calculator().window()
        );
    }

    println!("\n📅 Recent Games:");
    for game in &report.recent_games {
        println!(
            "   {} {} {}-{} {} (total {} vs line {}) {}",
            game.date.format("%Y-%m-%d"),
            game.home_team,
            game.home_score,
            game.away_score,
            game.away_team,
            game.total_points(),
            game.total_line,
            game.result()
        );
    }

    Ok(())
}
