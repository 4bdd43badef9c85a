//! Unit tests for dh-effects.

use dh_core::{Color, EffectId, Vec3};

use crate::{EffectKind, EffectScheduler, PopEffect};

#[cfg(test)]
mod effect {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(EffectKind::Collection.duration(), 0.3);
        assert_eq!(EffectKind::Delivery.duration(), 0.5);
        assert_eq!(EffectKind::Delivery.color(), Color::YELLOW);
    }

    #[test]
    fn scale_grows_linearly() {
        let mut e = PopEffect::new(EffectId(0), EffectKind::Delivery, Vec3::ZERO);
        assert_eq!(e.scale(), 0.0);
        e.elapsed = 0.25;
        assert!((e.scale() - 0.5).abs() < 1e-6);
        e.elapsed = 2.0;
        assert_eq!(e.scale(), 1.0);
    }

    #[test]
    fn display() {
        assert_eq!(EffectKind::Collection.to_string(), "collection");
    }
}

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut s = EffectScheduler::new();
        assert_eq!(s.spawn(EffectKind::Collection, Vec3::ZERO), EffectId(0));
        assert_eq!(s.spawn(EffectKind::Delivery, Vec3::X), EffectId(1));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn collection_finishes_after_its_duration() {
        let mut s = EffectScheduler::new();
        let id = s.spawn(EffectKind::Collection, Vec3::new(1.0, 1.0, 1.0));

        assert!(s.advance(0.2).is_empty());
        let scale = s.get(id).map(|e| e.scale()).unwrap();
        assert!(scale > 0.6 && scale < 0.7);

        let done = s.advance(0.2);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, id);
        assert_eq!(done[0].position, Vec3::new(1.0, 1.0, 1.0));
        assert!(s.is_empty());
    }

    #[test]
    fn effects_are_independent() {
        let mut s = EffectScheduler::new();
        let short = s.spawn(EffectKind::Collection, Vec3::ZERO);
        let long = s.spawn(EffectKind::Delivery, Vec3::ZERO);

        let done = s.advance(0.4);
        assert_eq!(done.iter().map(|e| e.id).collect::<Vec<_>>(), vec![short]);
        assert!(s.get(long).is_some());

        let done = s.advance(0.2);
        assert_eq!(done[0].id, long);
        assert!(s.is_empty());
    }

    #[test]
    fn ids_not_reused_after_finish() {
        let mut s = EffectScheduler::new();
        s.spawn(EffectKind::Collection, Vec3::ZERO);
        s.advance(1.0);
        assert_eq!(s.spawn(EffectKind::Collection, Vec3::ZERO), EffectId(1));
    }
}
