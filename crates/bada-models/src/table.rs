//! Owned element tree for one coefficient file.
//!
//! The XML document is parsed once and copied into plain owned nodes so the
//! store can keep it for the life of the process without borrowing the
//! source text.

/// One XML element: tag name, trimmed text and child elements in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Self::from_node(doc.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let text = node
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);
        let children = node
            .children()
            .filter(roxmltree::Node::is_element)
            .map(Self::from_node)
            .collect();
        Self {
            name: node.tag_name().name().to_owned(),
            text,
            children,
        }
    }

    /// Locate the first descendant matching a slash-delimited path.
    ///
    /// The path is relative to `self` (the document root is not named).
    /// Where several siblings share a tag, candidates are tried in document
    /// order and the first complete match wins.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.find_segments(&segments)
    }

    fn find_segments(&self, segments: &[&str]) -> Option<&Element> {
        let Some((head, rest)) = segments.split_first() else {
            return Some(self);
        };
        self.children
            .iter()
            .filter(|c| c.name == *head)
            .find_map(|c| c.find_segments(rest))
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0"?>
<BADA4_jet>
  <AFCM>
    <S> 122.6 </S>
    <Configuration HL_id="0">
      <LGDN><DPM_nonclean><CD_nonclean><d>1</d></CD_nonclean></DPM_nonclean></LGDN>
    </Configuration>
    <Configuration HL_id="1">
      <LGUP><DPM_clean><M_max>0.82</M_max></DPM_clean></LGUP>
    </Configuration>
  </AFCM>
</BADA4_jet>"#;

    #[test]
    fn parses_trimmed_text() {
        let root = Element::parse(DOC).unwrap();
        assert_eq!(root.name, "BADA4_jet");
        assert_eq!(root.find("AFCM/S").unwrap().text.as_deref(), Some("122.6"));
    }

    #[test]
    fn later_sibling_matches_when_first_does_not() {
        let root = Element::parse(DOC).unwrap();
        let m = root.find("AFCM/Configuration/LGUP/DPM_clean/M_max").unwrap();
        assert_eq!(m.text.as_deref(), Some("0.82"));
    }

    #[test]
    fn missing_path_is_none() {
        let root = Element::parse(DOC).unwrap();
        assert!(root.find("PFM/MREF").is_none());
        assert!(root.find("AFCM/Configuration/LGUP/DPM_nonclean").is_none());
    }

    #[test]
    fn children_keep_document_order() {
        let root = Element::parse(DOC).unwrap();
        let cd = root
            .find("AFCM/Configuration/LGDN/DPM_nonclean/CD_nonclean")
            .unwrap();
        assert!(cd.has_children());
        assert_eq!(cd.children[0].text.as_deref(), Some("1"));
        assert!(cd.text.is_none());
    }

    #[test]
    fn rejects_malformed_xml() {
        assert!(Element::parse("<a><b></a>").is_err());
    }
}
