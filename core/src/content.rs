//! The ordered table of page surfaces making up the book.
//!
//! Pages `2k` and `2k + 1` form leaf `k`. The final entry is the
//! single-sided back cover: a front face with no corresponding back.

/// Which face of a physical leaf a page surface is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSide {
    Front,
    Back,
}

/// Selects the static content block rendered on a page surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Cover,
    Intro,
    Summary,
    Skills,
    Experience,
    ExperienceCont,
    Education,
    Certifications,
    Projects,
    Contact,
    BackCover,
}

#[derive(Clone, Copy, Debug)]
pub struct PageDescriptor {
    pub id: &'static str,
    pub side: PageSide,
    pub kind: ContentKind,
}

const PAGES: [PageDescriptor; 11] = [
    PageDescriptor { id: "cover-front", side: PageSide::Front, kind: ContentKind::Cover },
    PageDescriptor { id: "cover-back", side: PageSide::Back, kind: ContentKind::Intro },
    PageDescriptor { id: "page-2", side: PageSide::Front, kind: ContentKind::Summary },
    PageDescriptor { id: "page-3", side: PageSide::Back, kind: ContentKind::Skills },
    PageDescriptor { id: "page-4", side: PageSide::Front, kind: ContentKind::Experience },
    PageDescriptor { id: "page-5", side: PageSide::Back, kind: ContentKind::ExperienceCont },
    PageDescriptor { id: "page-6", side: PageSide::Front, kind: ContentKind::Education },
    PageDescriptor { id: "page-7", side: PageSide::Back, kind: ContentKind::Certifications },
    PageDescriptor { id: "page-8", side: PageSide::Front, kind: ContentKind::Projects },
    PageDescriptor { id: "page-9", side: PageSide::Back, kind: ContentKind::Contact },
    PageDescriptor { id: "back-cover", side: PageSide::Front, kind: ContentKind::BackCover },
];

/// Page surface at `index`. Panics on an out-of-range index; that is a
/// construction defect, not a runtime condition.
pub fn page(index: usize) -> &'static PageDescriptor {
    &PAGES[index]
}

pub fn page_count() -> usize {
    PAGES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for a in 0..page_count() {
            for b in (a + 1)..page_count() {
                assert_ne!(page(a).id, page(b).id);
            }
        }
    }

    #[test]
    fn leaves_pair_front_and_back() {
        // Every complete leaf has a front at 2k and a back at 2k + 1.
        for k in 0..page_count() / 2 {
            assert_eq!(page(2 * k).side, PageSide::Front);
            assert_eq!(page(2 * k + 1).side, PageSide::Back);
        }
        // The dangling back cover is a lone front face.
        assert_eq!(page_count() % 2, 1);
        assert_eq!(page(page_count() - 1).side, PageSide::Front);
    }

    #[test]
    #[should_panic]
    fn out_of_range_access_panics() {
        let _ = page(page_count());
    }
}
