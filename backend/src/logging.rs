use tracing::{Event, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,backend=info";

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

struct PrizeServerLayer;

impl<S: Subscriber> Layer<S> for PrizeServerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if visitor.0.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        if let Some(line) = format_line(metadata.level(), &timestamp.to_string(), metadata.target(), &visitor.0) {
            println!("{}", line);
        }
    }
}

fn format_line(level: &tracing::Level, timestamp: &str, target: &str, message: &str) -> Option<String> {
    match *level {
        tracing::Level::ERROR => Some(format!("[{}] ❌ Error: {} - {}", timestamp, target, message)),
        tracing::Level::WARN => Some(format!("[{}] ⚠️ Warning: {} - {}", timestamp, target, message)),
        tracing::Level::INFO => Some(format!("[{}] ℹ️ {} - {}", timestamp, target, message)),
        tracing::Level::DEBUG => Some(format!("[{}] 🔄 {} - {}", timestamp, target, message)),
        _ => None,
    }
}

pub fn setup() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default().with(env_filter).with(PrizeServerLayer);

    tracing::subscriber::set_global_default(subscriber)
}
