use super::QuadTree;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rect;
use serde::Serialize;
use serde_json::{json, Value};

enum Frame {
    Visit(usize),
    Build(usize),
}

impl<V: Serialize> QuadTree<V> {
    /// The structural form of the tree as a JSON value: leaves carry
    /// their entries, internal nodes their four children in NW, NE, SW,
    /// SE order. The leaf/internal decomposition is part of the
    /// observable contract.
    pub fn to_json(&self) -> QuadtreeResult<Value> {
        let mut work = vec![Frame::Visit(self.root)];
        let mut built: Vec<Value> = Vec::new();
        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(index) => match self.nodes[index].children {
                    Some(children) => {
                        work.push(Frame::Build(index));
                        let [nw, ne, sw, se] = children.as_array();
                        work.push(Frame::Visit(se));
                        work.push(Frame::Visit(sw));
                        work.push(Frame::Visit(ne));
                        work.push(Frame::Visit(nw));
                    }
                    None => {
                        let node = &self.nodes[index];
                        let entries = node
                            .entries
                            .iter()
                            .map(|(point, value)| {
                                let value =
                                    serde_json::to_value(value).map_err(|err| {
                                        QuadtreeError::Serialize {
                                            message: err.to_string(),
                                        }
                                    })?;
                                Ok(json!({
                                    "point": { "x": point.x, "y": point.y },
                                    "value": value,
                                }))
                            })
                            .collect::<QuadtreeResult<Vec<Value>>>()?;
                        built.push(json!({
                            "type": "leaf",
                            "boundary": boundary_json(&node.boundary),
                            "entries": entries,
                        }));
                    }
                },
                Frame::Build(index) => {
                    let children = built.split_off(built.len() - 4);
                    built.push(json!({
                        "type": "internal",
                        "boundary": boundary_json(&self.nodes[index].boundary),
                        "children": children,
                    }));
                }
            }
        }
        Ok(built.pop().unwrap_or(Value::Null))
    }

    /// The structural form rendered as a JSON string.
    pub fn serialize(&self) -> QuadtreeResult<String> {
        let value = self.to_json()?;
        serde_json::to_string(&value).map_err(|err| QuadtreeError::Serialize {
            message: err.to_string(),
        })
    }
}

fn boundary_json(boundary: &Rect) -> Value {
    json!({
        "x": boundary.x,
        "y": boundary.y,
        "width": boundary.width,
        "height": boundary.height,
    })
}
