//! Flat display list produced by painting.
//!
//! Clips and transforms are push/pop pairs. A backend keeps a stack of each;
//! [`Scene::resolve`] does the same walk on the CPU and is what tests and
//! simple software backends use.

use crate::{Color, Font, Rect, Transform};

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        font: Font,
    },
    /// Everything until the matching `PopClip` is visible only inside `rect`,
    /// rounded by `radius`.
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
    PushTransform {
        transform: Transform,
    },
    PopTransform,
}

/// A drawable node in scene coordinates with the clip in effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Placed<'a> {
    pub node: &'a SceneNode,
    pub rect: Rect,
    /// Intersection of all active clips, `None` if nothing clips it.
    pub clip: Option<Rect>,
    /// Radius of the innermost clip.
    pub clip_radius: f32,
}

impl Placed<'_> {
    /// The part of the node that ends up on screen.
    pub fn visible_rect(&self) -> Option<Rect> {
        match self.clip {
            Some(c) => self.rect.intersect(&c),
            None => Some(self.rect),
        }
    }
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks the list applying transforms and clips. Unbalanced pops are
    /// ignored.
    pub fn resolve(&self) -> Vec<Placed<'_>> {
        let mut transforms = vec![Transform::identity()];
        // (accumulated clip, radius of the clip pushed at this level)
        let mut clips: Vec<(Option<Rect>, f32)> = vec![(None, 0.0)];
        let mut out = Vec::new();

        for node in &self.nodes {
            let tf = transforms.last().copied().unwrap_or_default();
            let (clip, clip_radius) = clips.last().copied().unwrap_or((None, 0.0));
            match node {
                SceneNode::Rect { rect, .. } | SceneNode::Text { rect, .. } => {
                    out.push(Placed {
                        node,
                        rect: tf.apply_to_rect(*rect),
                        clip,
                        clip_radius,
                    });
                }
                SceneNode::PushClip { rect, radius } => {
                    let r = tf.apply_to_rect(*rect);
                    let next = match clip {
                        // disjoint clips hide everything
                        Some(c) => Some(c.intersect(&r).unwrap_or(Rect::new(r.x, r.y, 0.0, 0.0))),
                        None => Some(r),
                    };
                    clips.push((next, *radius));
                }
                SceneNode::PopClip => {
                    if clips.len() > 1 {
                        clips.pop();
                    }
                }
                SceneNode::PushTransform { transform } => {
                    transforms.push(tf.combine(transform));
                }
                SceneNode::PopTransform => {
                    if transforms.len() > 1 {
                        transforms.pop();
                    }
                }
            }
        }
        out
    }

    /// `true` when every push has a matching pop.
    pub fn is_balanced(&self) -> bool {
        let mut clips = 0i32;
        let mut transforms = 0i32;
        for node in &self.nodes {
            match node {
                SceneNode::PushClip { .. } => clips += 1,
                SceneNode::PopClip => clips -= 1,
                SceneNode::PushTransform { .. } => transforms += 1,
                SceneNode::PopTransform => transforms -= 1,
                _ => {}
            }
            if clips < 0 || transforms < 0 {
                return false;
            }
        }
        clips == 0 && transforms == 0
    }
}
