use crate::session::register_markers;
use crate::testing::FakeTransport;
use crate::{
    ChoicePrompt, FixedAccent, Invoker, LinkPrompt, Marker, MessageHandle, Platform,
    PlatformMarkers, Prompt, PromptContext, PromptError, PromptOptions, PromptTransport,
    UpdatePrompt,
};
use overbot_common::test_utils::discord_fixtures;
use overbot_common::{ChannelId, MessageId, UserId};
use std::sync::Arc;
use std::time::Duration;

const ANSWER_TIMEOUT: Duration = Duration::from_secs(5);
const SHORT_TIMEOUT: Duration = Duration::from_millis(50);

fn context_for(transport: &Arc<FakeTransport>, user: UserId, channel: ChannelId) -> PromptContext {
    PromptContext::new(
        Invoker::new(user, format!("user-{user}"), None),
        channel,
        Arc::clone(transport) as _,
        Arc::new(FixedAccent(0x00FA_9C1D)),
    )
}

fn context(transport: &Arc<FakeTransport>) -> PromptContext {
    context_for(
        transport,
        discord_fixtures::test_user_id(),
        discord_fixtures::test_channel_id(),
    )
}

fn choice(timeout: Duration) -> ChoicePrompt {
    ChoicePrompt::new(
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        PromptOptions::default().with_timeout(timeout),
    )
}

#[tokio::test]
async fn test_timeout_yields_no_selection_and_deletes_once() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);

    let result = choice(SHORT_TIMEOUT).start(&ctx).await;

    assert!(matches!(result, Err(PromptError::NoSelection)));
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(transport.delete_attempts(), 1);
    assert_eq!(transport.deletes(), 1);
}

#[tokio::test]
async fn test_missing_permission_fails_before_sending() {
    let transport = Arc::new(FakeTransport::new().without_marker_permission());
    let ctx = context(&transport);

    let result = LinkPrompt::default().start(&ctx).await;

    assert!(matches!(result, Err(PromptError::CannotAttachMarkers)));
    assert!(transport.sent().is_empty());
    assert_eq!(transport.delete_attempts(), 0);
}

#[tokio::test]
async fn test_send_failure_is_reported() {
    let transport = Arc::new(FakeTransport::new().failing_send());
    let ctx = context(&transport);

    let result = choice(ANSWER_TIMEOUT).start(&ctx).await;

    assert!(matches!(result, Err(PromptError::Transport(_))));
    assert_eq!(transport.delete_attempts(), 0);
}

#[tokio::test]
async fn test_link_cancel_resolves_to_none() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);
    let markers = PlatformMarkers::default();
    let prompt = LinkPrompt::new(&markers, "en-US").with_timeout(ANSWER_TIMEOUT);

    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        transport.react(message.id, markers.cancel.clone(), ctx.invoker.id);
    });

    assert_eq!(result.unwrap(), None);
    assert_eq!(transport.deletes(), 1);
}

#[tokio::test]
async fn test_link_platform_marker_resolves_to_platform() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);
    let markers = PlatformMarkers::default();
    let prompt = LinkPrompt::new(&markers, "en-US").with_timeout(ANSWER_TIMEOUT);

    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        transport.react(message.id, markers.psn.clone(), ctx.invoker.id);
    });

    assert_eq!(result.unwrap(), Some(Platform::Psn));
    let (message, _) = transport.sent()[0].clone();
    assert!(!transport.is_live(message));
}

#[tokio::test]
async fn test_update_prompt_renders_fields_and_resolves() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);
    let markers = PlatformMarkers::default();
    let prompt = UpdatePrompt::new(Platform::Pc, "Someone#1234", &markers, "en-US")
        .with_timeout(ANSWER_TIMEOUT);

    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        transport.react(message.id, markers.nintendo_switch.clone(), ctx.invoker.id);
    });

    assert_eq!(result.unwrap(), Some(Platform::NintendoSwitch));
    let (_, surface) = transport.sent()[0].clone();
    assert_eq!(surface.fields.len(), 2);
    assert_eq!(surface.fields[1].value, "Someone#1234");
    assert_eq!(surface.author.name, ctx.invoker.name);
    assert_eq!(surface.color, 0x00FA_9C1D);
}

#[tokio::test]
async fn test_choice_returns_selected_entry() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);

    let prompt = choice(ANSWER_TIMEOUT);
    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        transport.react(message.id, Marker::keycap(2), ctx.invoker.id);
    });

    assert_eq!(result.unwrap(), "B");
    let (_, surface) = transport.sent()[0].clone();
    assert_eq!(surface.description, "1. A\n2. B\n3. C");
}

#[tokio::test]
async fn test_ignored_signals_end_in_timeout() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);
    let stranger = UserId(42);

    let prompt = choice(Duration::from_millis(100));
    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        // Out of range, foreign emoji, another user, the bot, another message.
        transport.react(message.id, Marker::keycap(4), ctx.invoker.id);
        transport.react(message.id, "👍", ctx.invoker.id);
        transport.react(message.id, Marker::keycap(1), stranger);
        transport.react(message.id, Marker::keycap(1), transport.bot_id());
        transport.react(MessageId(message.id.get() + 1), Marker::keycap(1), ctx.invoker.id);
    });

    assert!(matches!(result, Err(PromptError::NoSelection)));
    assert_eq!(transport.deletes(), 1);
}

#[tokio::test]
async fn test_concurrent_sessions_are_isolated() {
    let transport = Arc::new(FakeTransport::new());
    let first = context_for(&transport, UserId(1), ChannelId(10));
    let second = context_for(&transport, UserId(2), ChannelId(20));
    let first_prompt = choice(ANSWER_TIMEOUT);
    let second_prompt = choice(ANSWER_TIMEOUT);

    let (a, b, ()) = tokio::join!(
        first_prompt.start(&first),
        second_prompt.start(&second),
        async {
            let in_first = transport.wait_for_sent_in(ChannelId(10)).await;
            let in_second = transport.wait_for_sent_in(ChannelId(20)).await;
            transport.react(in_first.id, Marker::keycap(1), UserId(2));
            transport.react(in_second.id, Marker::keycap(1), UserId(1));
            transport.react(in_first.id, Marker::keycap(2), UserId(1));
            transport.react(in_second.id, Marker::keycap(3), UserId(2));
        }
    );

    assert_eq!(a.unwrap(), "B");
    assert_eq!(b.unwrap(), "C");
    assert_eq!(transport.deletes(), 2);
}

#[tokio::test]
async fn test_externally_deleted_prompt_still_resolves() {
    let transport = Arc::new(FakeTransport::new());
    let ctx = context(&transport);

    let prompt = choice(ANSWER_TIMEOUT);
    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        transport.delete_externally(message);
        transport.react(message.id, Marker::keycap(3), ctx.invoker.id);
    });

    assert_eq!(result.unwrap(), "C");
    assert_eq!(transport.delete_attempts(), 1);
    assert_eq!(transport.deletes(), 0);
}

#[tokio::test]
async fn test_reaction_counts_before_its_marker_is_attached() {
    let transport = Arc::new(FakeTransport::new().failing_marker_at(2));
    let ctx = context(&transport);
    let markers = PlatformMarkers::default();
    let prompt = LinkPrompt::new(&markers, "en-US").with_timeout(ANSWER_TIMEOUT);

    let (result, ()) = tokio::join!(prompt.start(&ctx), async {
        let message = transport.wait_for_sent(1).await;
        transport.react(message.id, markers.xbl.clone(), ctx.invoker.id);
    });

    assert_eq!(result.unwrap(), Some(Platform::Xbl));
    assert!(transport.marker_attempts() <= 3);
}

#[tokio::test]
async fn test_registration_stops_at_first_failure() {
    let transport = Arc::new(FakeTransport::new().failing_marker_at(2));
    let message = MessageHandle::new(ChannelId(1), MessageId(1));
    let markers: Vec<Marker> = (1..=5).map(Marker::keycap).collect();

    let attached = register_markers(Arc::clone(&transport) as _, message, markers).await;

    // The message was never sent, so the very first attempt already fails.
    assert_eq!(attached, 0);
    assert_eq!(transport.marker_attempts(), 1);
}

#[tokio::test]
async fn test_registration_attaches_in_order_until_failure() {
    let transport = Arc::new(FakeTransport::new().failing_marker_at(2));
    let ctx = context(&transport);
    let surface = choice(ANSWER_TIMEOUT).render_surface(&ctx.invoker, &FixedAccent(0));
    let message = transport
        .send(ctx.channel, &surface)
        .await
        .unwrap();
    let markers: Vec<Marker> = (1..=5).map(Marker::keycap).collect();

    let attached = register_markers(Arc::clone(&transport) as _, message, markers).await;

    assert_eq!(attached, 2);
    assert_eq!(transport.marker_attempts(), 3);
    assert_eq!(
        transport.markers_on(message),
        vec![Marker::keycap(1), Marker::keycap(2)]
    );
}
