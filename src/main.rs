mod apps;
mod catalog;
mod engine;
mod geo;
mod models;
mod services;
mod session;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::apps::order_hall::{self, OrderHallApp, Tab};
use crate::apps::order_hall::projection::{MatchedFilter, PendingFilter};
use crate::apps::publish_request::{self, PublishRequestApp};
use crate::apps::request_details::{self, RequestDetailsApp};
use crate::engine::{App, Runtime};
use crate::models::Request;
use crate::session::{Role, Session};

/// Scripted walkthrough of the marketplace demo: requester-side request
/// authoring and matching, provider-side order hall, or both.
#[derive(Parser)]
#[command(name = "errand-cli", version)]
struct Cli {
    /// Run only one side of the marketplace.
    #[arg(long, value_enum)]
    role: Option<Role>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.role {
        Some(Role::Requester) => requester_session().await?,
        Some(Role::Provider) => provider_session().await?,
        None => {
            let mut session = Session::default();
            log::info!("starting as {}", session.role.label());
            requester_session().await?;
            session.toggle_role();
            log::info!("switching to {}", session.role.label());
            provider_session().await?;
        }
    }
    Ok(())
}

/// Author a request, wait for the category suggestion, publish, then walk
/// through the matching view for the published request.
async fn requester_session() -> Result<()> {
    let mut session = Session::new(Role::Requester);
    let request = publish_flow().await?;
    session.open_details();
    details_flow(request).await?;
    session.back_to_publish();
    Ok(())
}

async fn publish_flow() -> Result<Request> {
    log::info!("=== {} ===", PublishRequestApp::title());
    log::info!("selectable categories: {}", catalog::CATEGORIES.join(" / "));
    let mut runtime = Runtime::<PublishRequestApp>::new(());

    // A typing burst; only the pause after the last keystroke counts.
    for text in ["厨房水龙头", "厨房水龙头漏水", "厨房水龙头漏水严重，需要更换阀芯"] {
        runtime.dispatch(publish_request::Msg::DescriptionChanged(text.to_string()));
    }
    runtime.settle(Duration::from_millis(3200)).await;

    if let Some(suggestion) = &runtime.state().suggestion {
        log::info!("suggested categories: {}", suggestion.join(" / "));
    }
    runtime.dispatch(publish_request::Msg::ApplySuggestion);

    let slots = catalog::time_slot_options();
    let slot = slots.first().context("no selectable time slots")?;
    runtime.dispatch(publish_request::Msg::SelectTimeSlot(slot.clone()));
    runtime.dispatch(publish_request::Msg::ToggleCategory("跑腿代办".to_string()));
    runtime.dispatch(publish_request::Msg::ToggleCategory("跑腿代办".to_string()));
    runtime.dispatch(publish_request::Msg::AddImage);
    runtime.dispatch(publish_request::Msg::Publish);

    let request = runtime
        .state()
        .published()
        .context("publish was blocked")?
        .clone();
    log::info!(
        "published: {}",
        serde_json::to_string(&request).context("encoding published request")?
    );
    Ok(request)
}

async fn details_flow(request: Request) -> Result<()> {
    log::info!("=== {} ===", RequestDetailsApp::title());
    let mut runtime = Runtime::<RequestDetailsApp>::new((
        request,
        catalog::seed_candidates(),
        catalog::seed_recommended(),
    ));

    for candidate in runtime.state().candidates() {
        log::info!(
            "responder {} ({}, 评分 {:.1}, ¥{}/小时, {})",
            candidate.name,
            candidate.title,
            candidate.rating,
            candidate.price,
            candidate.distance,
        );
    }

    runtime.dispatch(request_details::Msg::BatchMessageChanged(
        "请问今天下午能上门吗？".to_string(),
    ));
    runtime.dispatch(request_details::Msg::SendBatchMessage);
    runtime.settle(Duration::from_millis(1500)).await;

    runtime.dispatch(request_details::Msg::RemoveRecommended("r2".to_string()));
    runtime.dispatch(request_details::Msg::Book("w1".to_string()));
    runtime.dispatch(request_details::Msg::RequestCancel);
    runtime.dispatch(request_details::Msg::DismissCancel);
    runtime.dispatch(request_details::Msg::MarkCompleted);
    log::info!(
        "request {} finished as {:?}",
        runtime.state().request.id,
        runtime.state().request.status,
    );

    for notification in runtime.drain_notifications() {
        log::info!(
            "event: {}",
            serde_json::to_string(&notification).context("encoding event")?
        );
    }
    Ok(())
}

/// Go on duty, claim the nearest order, then review the matched queue.
async fn provider_session() -> Result<()> {
    log::info!("=== {} ===", OrderHallApp::title());
    let mut runtime = Runtime::<OrderHallApp>::new((catalog::seed_orders(), catalog::seed_stats()));

    runtime.dispatch(order_hall::Msg::ToggleActive);
    runtime.dispatch(order_hall::Msg::SetPendingFilter(PendingFilter::Nearest));

    let visible = runtime.state().visible_pending();
    log::info!("{} ({} 单)", PendingFilter::Nearest.label(), visible.len());
    for order in &visible {
        log::info!(
            "  {} {} {} @ {}",
            order.service_type,
            order.distance,
            order.time,
            order.visible_address(),
        );
    }

    if let Some(nearest) = visible.first() {
        runtime.dispatch(order_hall::Msg::TakeOrder(nearest.id.clone()));
    }
    runtime.settle(Duration::from_millis(1200)).await;

    runtime.dispatch(order_hall::Msg::IgnoreOrder("o3".to_string()));
    runtime.dispatch(order_hall::Msg::OrdersPushed(vec![models::Order {
        id: "o5".to_string(),
        client_name: "吴先生".to_string(),
        service_type: "搬家拉货".to_string(),
        summary: "两件家具搬到隔壁小区。".to_string(),
        time: "明天 10:00".to_string(),
        distance: "2.5km".to_string(),
        address: "滨江新村 7栋 101".to_string(),
        status: models::OrderStatus::Pending,
        unread_messages: 0,
    }]));

    runtime.dispatch(order_hall::Msg::SelectTab(Tab::Matched));
    runtime.dispatch(order_hall::Msg::SetMatchedFilter(MatchedFilter::Waiting));
    let waiting = runtime.state().visible_orders();
    log::info!("{}: {} 单", MatchedFilter::Waiting.label(), waiting.len());
    for order in &waiting {
        // Address stays masked until the client confirms.
        log::info!("  {} @ {}", order.service_type, order.visible_address());
    }

    let stats = &runtime.state().stats;
    log::info!(
        "stats: {}",
        serde_json::to_string(stats).context("encoding stats")?
    );
    for notification in runtime.drain_notifications() {
        log::info!(
            "event: {}",
            serde_json::to_string(&notification).context("encoding event")?
        );
    }
    Ok(())
}
