use crate::constants::{PARTICLE_CLASS, SPARK_CLASS};
use crate::dom;
use crate::style;
use fnv::FnvHashMap;
use fx_core::{ObjectId, PopulationEvent, ReducedMotion, Spark, SparkEvent, SparkId, SparkKind};
use std::time::Duration;
use web_sys as web;

/// Mirrors the core's live set and sparks as DOM nodes.
pub struct Presenter {
    document: web::Document,
    container: web::Element,
    particles: FnvHashMap<ObjectId, web::HtmlElement>,
    sparks: FnvHashMap<SparkId, (web::HtmlElement, Spark)>,
    reduced_motion: ReducedMotion,
    marked_reduced: bool,
}

impl Presenter {
    pub fn new(
        document: web::Document,
        container: web::Element,
        reduced_motion: ReducedMotion,
    ) -> Self {
        Self {
            document,
            container,
            particles: FnvHashMap::default(),
            sparks: FnvHashMap::default(),
            reduced_motion,
            marked_reduced: false,
        }
    }

    pub fn apply_population(&mut self, events: Vec<PopulationEvent>) {
        let reduced = self.reduced_motion.is_set();
        for ev in events {
            match ev {
                PopulationEvent::Spawned(object) => {
                    let css = style::particle_css(&object, reduced);
                    if let Some(el) = dom::create_div(&self.document, PARTICLE_CLASS, &css) {
                        _ = self.container.append_child(&el);
                        self.particles.insert(object.id, el);
                    }
                }
                PopulationEvent::Despawned { id, .. } => {
                    if let Some(el) = self.particles.remove(&id) {
                        el.remove();
                    }
                }
                PopulationEvent::Repositioned { id, x } => {
                    if let Some(el) = self.particles.get(&id) {
                        _ = el.style().set_property("left", &style::px(x));
                    }
                }
            }
        }
    }

    pub fn apply_sparks(&mut self, events: Vec<SparkEvent>, now: Duration) {
        let Some(body) = self.document.body() else {
            return;
        };
        for ev in events {
            match ev {
                SparkEvent::Spawned(spark) => {
                    let css = style::spark_css(&spark, now);
                    if let Some(el) = dom::create_div(&self.document, SPARK_CLASS, &css) {
                        _ = body.append_child(&el);
                        self.sparks.insert(spark.id, (el, spark));
                    }
                }
                SparkEvent::Retired(id) => {
                    if let Some((el, _)) = self.sparks.remove(&id) {
                        el.remove();
                    }
                }
            }
        }
    }

    /// Moves burst sparks along their path; trail sparks animate in CSS.
    pub fn animate_sparks(&self, now: Duration) {
        for (el, spark) in self.sparks.values() {
            if spark.kind == SparkKind::Burst {
                _ = el.set_attribute("style", &style::spark_css(spark, now));
            }
        }
    }

    /// Adds the page-wide reduced-motion class the first time the flag is seen.
    pub fn sync_reduced_motion(&mut self) {
        if !self.marked_reduced && self.reduced_motion.is_set() {
            dom::mark_reduced_motion(&self.document);
            self.marked_reduced = true;
        }
    }
}
