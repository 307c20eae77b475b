// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: only the most recent signal ever relays.

use core::time::Duration;

use dropkit_transition::{DelayedTransition, TransitionConfig, TransitionState};
use dropkit_trigger::TriggerKind;
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = TriggerKind> {
    prop_oneof![
        Just(TriggerKind::Open),
        Just(TriggerKind::Close),
        Just(TriggerKind::Toggle),
    ]
}

proptest! {
    #[test]
    fn only_latest_timer_fires(
        open_ms in 0_u64..200,
        close_ms in 0_u64..200,
        signals in prop::collection::vec((kind(), 0_u64..50), 1..20),
    ) {
        let mut t = DelayedTransition::new(TransitionConfig::default().with_delays(
            Duration::from_millis(open_ms),
            Duration::from_millis(close_ms),
        ));
        let mut now = 0;
        let mut timers = Vec::new();
        for (kind, gap) in signals {
            now += gap;
            timers.push(t.on_trigger(kind, now));
        }
        let last = timers.pop().unwrap();

        for stale in timers {
            prop_assert_eq!(t.fire(stale), None);
        }
        let expected = if last.kind() == TriggerKind::Open {
            TransitionState::Opening
        } else {
            TransitionState::Closing
        };
        prop_assert_eq!(t.state(), expected);

        prop_assert_eq!(t.poll(last.due()), Some(last.kind()));
        prop_assert!(matches!(t.state(), TransitionState::Opened | TransitionState::Closed));
        prop_assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn generations_strictly_increase(signals in prop::collection::vec(kind(), 1..20)) {
        let mut t = DelayedTransition::default();
        let mut previous = t.generation();
        for kind in signals {
            let timer = t.on_trigger(kind, 0);
            prop_assert!(timer.generation() > previous);
            previous = timer.generation();
        }
    }
}
