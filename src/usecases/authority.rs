//! Brackets outgoing messages with authority markers.
//!
//! Output produced under an elevated authority is wrapped so the renderer can
//! show where the elevated context starts and ends. Without an authority the
//! message passes through untouched.

use crate::domain::{Authority, MessageChain, Segment, as_message_chain};
use crate::shared::MetadataRegistry;
use std::hash::Hash;

/// `"[# ADMIN RIGHTS GRANTED #]\n"` for [`Authority::Admin`].
pub fn leading_marker(authority: Authority) -> String {
    format!("[# {} RIGHTS GRANTED #]\n", authority)
}

/// `"\n[# ADMIN RIGHTS REVOKED #]"` for [`Authority::Admin`].
pub fn trailing_marker(authority: Authority) -> String {
    format!("\n[# {} RIGHTS REVOKED #]", authority)
}

/// `leading + body + trailing`, or `body` as-is when `authority` is `None`.
///
/// Not idempotent: annotating an annotated chain nests the markers.
pub fn annotate(body: MessageChain, authority: Option<Authority>) -> MessageChain {
    let Some(authority) = authority else {
        return body;
    };
    let mut segments = Vec::with_capacity(body.len() + 2);
    segments.push(Segment::plain(leading_marker(authority)));
    segments.extend(body.into_segments());
    segments.push(Segment::plain(trailing_marker(authority)));
    segments.into()
}

pub fn annotate_text(text: &str, authority: Option<Authority>) -> MessageChain {
    annotate(as_message_chain(text), authority)
}

/// Annotates `body` with the [`Authority`] registered for `command`, if any.
pub fn annotate_for<K: Eq + Hash>(
    registry: &MetadataRegistry<K>,
    command: K,
    body: MessageChain,
) -> MessageChain {
    let authority = registry.get::<Authority>(command).copied();
    annotate(body, authority)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessageChain {
        vec![
            Segment::plain("ping"),
            Segment::At { target: 10001 },
            Segment::Image { id: "{x}.png".into() },
        ]
        .into()
    }

    #[test]
    fn test_none_is_identity() {
        assert_eq!(annotate(sample(), None), sample());
        assert_eq!(annotate(MessageChain::new(), None), MessageChain::new());
    }

    #[test]
    fn test_admin_ping() {
        let out = annotate_text("ping", Some(Authority::Admin));
        let parts: Vec<String> = out.segments().iter().map(ToString::to_string).collect();
        assert_eq!(
            parts,
            vec![
                "[# ADMIN RIGHTS GRANTED #]\n",
                "ping",
                "\n[# ADMIN RIGHTS REVOKED #]"
            ]
        );
        assert_eq!(
            out.content_to_string(),
            "[# ADMIN RIGHTS GRANTED #]\nping\n[# ADMIN RIGHTS REVOKED #]"
        );
    }

    #[test]
    fn test_body_is_contiguous_in_result_for_every_authority() {
        for a in Authority::ALL {
            let out = annotate(sample(), Some(a));
            let segs = out.segments();
            assert_eq!(segs.len(), sample().len() + 2);
            assert_eq!(&segs[1..segs.len() - 1], sample().segments());
            assert_eq!(segs[0], Segment::plain(leading_marker(a)));
            assert_eq!(segs[segs.len() - 1], Segment::plain(trailing_marker(a)));
        }
    }

    #[test]
    fn test_double_annotation_nests_markers() {
        let once = annotate_text("x", Some(Authority::Owner));
        let twice = annotate(once.clone(), Some(Authority::Owner));
        assert_ne!(twice, once);
        assert_eq!(
            twice.content_to_string(),
            "[# OWNER RIGHTS GRANTED #]\n[# OWNER RIGHTS GRANTED #]\nx\n[# OWNER RIGHTS REVOKED #]\n[# OWNER RIGHTS REVOKED #]"
        );
    }

    #[test]
    fn test_annotate_for_uses_registered_authority() {
        let mut reg = MetadataRegistry::new();
        reg.register("ban", Authority::Admin);

        let banned = annotate_for(&reg, "ban", as_message_chain("done"));
        assert!(banned.content_to_string().starts_with("[# ADMIN RIGHTS GRANTED #]"));

        let plain = annotate_for(&reg, "ping", as_message_chain("pong"));
        assert_eq!(plain, as_message_chain("pong"));
    }
}
