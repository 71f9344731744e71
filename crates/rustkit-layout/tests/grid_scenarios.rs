//! End-to-end grid layout scenarios.
//!
//! Each test builds a small form the way a host container would, measures
//! it and lays it out, then checks the bounds handed to the elements.

use std::cell::RefCell;
use std::rc::Rc;

use rustkit_common::init_test_logging;
use rustkit_layout::{
    CellRect, Constraints, Gaps, Grid, GridError, GridLayout, HorizontalAlign, LayoutElement,
    Rect, Size,
};

#[derive(Debug, Default)]
struct Widget {
    preferred: Size,
    visible: bool,
    baseline: Option<i32>,
    bounds: Option<Rect>,
}

impl LayoutElement for Widget {
    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn place(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn baseline(&self, _size: Size) -> Option<i32> {
        self.baseline
    }
}

type WidgetRef = Rc<RefCell<Widget>>;

fn widget(width: i32, height: i32) -> WidgetRef {
    Rc::new(RefCell::new(Widget {
        preferred: Size::new(width, height),
        visible: true,
        baseline: None,
        bounds: None,
    }))
}

fn placed(widget: &WidgetRef) -> Rect {
    widget.borrow().bounds.unwrap_or_default()
}

fn two_cell_row(first: &WidgetRef, second: &WidgetRef) -> Grid<WidgetRef> {
    let mut grid = Grid::new();
    grid.register(first.clone(), Constraints::new(0, 0).fill())
        .unwrap();
    grid.register(second.clone(), Constraints::new(1, 0).fill())
        .unwrap();
    grid
}

#[test]
fn test_two_cells_no_separators() {
    init_test_logging();
    let a = widget(50, 10);
    let b = widget(30, 10);
    let grid = two_cell_row(&a, &b);

    let data = grid.calculate_layout_data();
    assert_eq!(data.columns_coord(), &[0, 50, 80]);
    assert_eq!(grid.preferred_size(), Size::new(80, 10));
}

#[test]
fn test_two_cells_with_separator() {
    init_test_logging();
    let a = widget(50, 10);
    let b = widget(30, 10);
    let mut grid = two_cell_row(&a, &b);
    grid.set_columns_distance([10]);

    let data = grid.layout(Rect::new(0, 0, 90, 10)).unwrap();
    assert_eq!(data.columns_coord(), &[0, 60, 90]);
    assert_eq!(placed(&a), Rect::new(0, 0, 50, 10));
    assert_eq!(placed(&b), Rect::new(60, 0, 30, 10));
}

#[test]
fn test_resizable_column_takes_extra_width() {
    init_test_logging();
    let a = widget(50, 10);
    let b = widget(30, 10);
    let mut grid = two_cell_row(&a, &b);
    grid.set_resizable_columns([1]);

    grid.layout(Rect::new(0, 0, 100, 10)).unwrap();
    assert_eq!(placed(&a), Rect::new(0, 0, 50, 10));
    assert_eq!(placed(&b), Rect::new(50, 0, 50, 10));
}

#[test]
fn test_register_into_occupied_cell() {
    init_test_logging();
    let a = widget(50, 10);
    let b = widget(30, 10);
    let mut grid = two_cell_row(&a, &b);

    let err = grid
        .register(widget(5, 5), Constraints::new(0, 0))
        .unwrap_err();
    assert_eq!(
        err,
        GridError::Overlap {
            requested: CellRect::new(0, 0, 1, 1),
            existing: CellRect::new(0, 0, 1, 1),
        }
    );
    assert_eq!(grid.len(), 2);
}

#[test]
fn test_nested_grid_sets_parent_span_width() {
    init_test_logging();
    let left = widget(40, 10);
    let right = widget(60, 10);

    let mut grid: Grid<WidgetRef> = Grid::new();
    let sub = grid
        .register_sub_grid(Constraints::new(0, 0).span(2, 1).fill())
        .unwrap();
    let inner = grid.sub_grid_mut(sub).unwrap();
    inner
        .register(left.clone(), Constraints::new(0, 0))
        .unwrap();
    inner
        .register(right.clone(), Constraints::new(1, 0))
        .unwrap();

    let data = grid.calculate_layout_data();
    let coords = data.columns_coord();
    assert!(coords[2] - coords[0] >= 100);

    grid.layout(Rect::new(0, 0, 100, 10)).unwrap();
    assert_eq!(placed(&left), Rect::new(0, 0, 40, 10));
    assert_eq!(placed(&right), Rect::new(40, 0, 60, 10));
}

#[test]
fn test_label_field_form() {
    init_test_logging();
    // label | field (resizable)
    // label | field
    // wide checkbox spanning both columns
    let labels = [widget(40, 16), widget(60, 16)];
    let fields = [widget(100, 20), widget(80, 20)];
    let checkbox = widget(120, 18);

    let mut layout = GridLayout::builder()
        .insets(Gaps::uniform(4))
        .resizable_columns([1])
        .columns_distance([6])
        .rows_distance([2, 2])
        .build();
    let grid = layout.root_grid_mut();
    for (row, (label, field)) in labels.iter().zip(fields.iter()).enumerate() {
        grid.register(label.clone(), Constraints::new(0, row).width_group("labels"))
            .unwrap();
        grid.register(
            field.clone(),
            Constraints::new(1, row).horizontal_align(HorizontalAlign::Fill),
        )
        .unwrap();
    }
    grid.register(checkbox.clone(), Constraints::new(0, 2).span(2, 1))
        .unwrap();

    // columns: 60 + 6 | 100 ; rows: 20 + 2 | 20 + 2 | 18
    assert_eq!(layout.preferred_size(), Size::new(166 + 8, 62 + 8));

    layout.layout_container(Rect::new(0, 0, 274, 70)).unwrap();
    // Extra 100 goes to the field column
    assert_eq!(placed(&fields[0]), Rect::new(70, 4, 200, 20));
    assert_eq!(placed(&fields[1]), Rect::new(70, 26, 200, 20));
    // Labels keep their width, centered vertically in a 20px row
    assert_eq!(placed(&labels[0]), Rect::new(4, 6, 40, 16));
    assert_eq!(placed(&labels[1]), Rect::new(4, 28, 60, 16));
    assert_eq!(placed(&checkbox), Rect::new(4, 48, 120, 18));

    let members: Vec<_> = layout.root_grid().width_group_members("labels").collect();
    assert_eq!(members.len(), 2);
}

#[test]
fn test_unregister_then_relayout() {
    init_test_logging();
    let a = widget(50, 10);
    let b = widget(30, 10);
    let mut grid = Grid::new();
    grid.register(a.clone(), Constraints::new(0, 0)).unwrap();
    let b_id = grid.register(b.clone(), Constraints::new(1, 0)).unwrap();

    grid.unregister(b_id).unwrap();
    assert_eq!(grid.unregister(b_id).unwrap_err(), GridError::NotRegistered(b_id));

    let data = grid.layout(Rect::new(0, 0, 50, 10)).unwrap();
    assert_eq!(data.columns_coord(), &[0, 50]);
}

#[test]
fn test_hidden_widget_reserves_cell() {
    init_test_logging();
    let hidden = widget(50, 10);
    hidden.borrow_mut().visible = false;
    let shown = widget(30, 10);

    let mut grid = Grid::new();
    grid.register(hidden.clone(), Constraints::new(0, 0))
        .unwrap();
    grid.register(shown.clone(), Constraints::new(1, 0))
        .unwrap();

    assert!(grid
        .register(widget(1, 1), Constraints::new(0, 0))
        .is_err());

    grid.layout(Rect::new(0, 0, 30, 10)).unwrap();
    assert!(hidden.borrow().bounds.is_none());
    assert_eq!(placed(&shown), Rect::new(0, 0, 30, 10));
}

#[test]
fn test_label_and_field_share_baseline() {
    init_test_logging();
    let label = widget(30, 14);
    label.borrow_mut().baseline = Some(11);
    let field = widget(80, 22);
    field.borrow_mut().baseline = Some(16);

    let mut grid = Grid::new();
    grid.register(label.clone(), Constraints::new(0, 0).baseline_align(true))
        .unwrap();
    grid.register(field.clone(), Constraints::new(1, 0).baseline_align(true))
        .unwrap();

    // ascent max(11, 16) + descent max(3, 6)
    assert_eq!(grid.preferred_size(), Size::new(110, 22));

    grid.layout(Rect::new(0, 0, 110, 22)).unwrap();
    assert_eq!(placed(&label), Rect::new(0, 5, 30, 14));
    assert_eq!(placed(&field), Rect::new(30, 0, 80, 22));
}
