use clap::Subcommand;
use tally_core::form::CheckinForm;
use tally_core::gateway::{ChatGateway, WebhookGateway};
use tally_core::streak::{today, StreakStore};
use tally_core::Config;

#[derive(Subcommand)]
pub enum DailyAction {
    /// Print the configured check-in questions
    Questions,
    /// Compose the check-in message from answers (one per question, in order)
    Compose {
        user_id: String,
        answers: Vec<String>,
    },
    /// Compose and post to the check-in channel via the stored webhook
    Post {
        user_id: String,
        answers: Vec<String>,
    },
}

pub fn run(action: DailyAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let form = CheckinForm::new(config.checkin.questions.clone());

    match action {
        DailyAction::Questions => {
            for (i, question) in form.questions().iter().enumerate() {
                println!("{}. {question}", i + 1);
            }
        }
        DailyAction::Compose { user_id, answers } => {
            println!("{}", compose(&form, &user_id, &answers)?);
        }
        DailyAction::Post { user_id, answers } => {
            let message = compose(&form, &user_id, &answers)?;
            let runtime = tokio::runtime::Runtime::new()?;
            let gateway = WebhookGateway::new(runtime.handle().clone());
            gateway.send_channel_message(&config.platform.check_in_channel_id, &message)?;
            println!("check-in posted");
        }
    }
    Ok(())
}

fn compose(
    form: &CheckinForm,
    user_id: &str,
    answers: &[String],
) -> Result<String, Box<dyn std::error::Error>> {
    form.validate(answers)?;
    let store = StreakStore::open_default()?;
    let streak = store.get(user_id).map(|r| r.streak).unwrap_or(0);
    Ok(form.compose(user_id, streak, today(), answers))
}
