use exercises::console::{HistoryConsole, RoundsConsole};
use exercises::CircularList;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

#[test]
fn round_robin_demo_transcript() {
    let mut console = RoundsConsole::new(Vec::new());
    console
        .demo(names(&["P1: Rahul", "P2: Meena", "P3: Karthik"]), "P4: Aishwarya")
        .unwrap();

    let rule = "-".repeat(46);
    let expected = format!(
        "--- Circular Linked List Demo: Round-Robin Check-Up System ---\n\
         \n\
         [Action 1] Creating the list:\n\
         Successfully created Circular Linked List with 3 patients.\n\
         \n\
         --- Current Check-Up Order (Circular Cycle) ---\n\
         P1: Rahul -> P2: Meena -> P3: Karthik -> (P1: Rahul)\n\
         {rule}\n\
         Total Patients: 3\n\
         \n\
         [Action 2] Insert 'P4: Aishwarya' after 'P2: Meena':\n\
         Inserted 'P4: Aishwarya' after 'P2: Meena'.\n\
         \n\
         --- Current Check-Up Order (Circular Cycle) ---\n\
         P1: Rahul -> P2: Meena -> P4: Aishwarya -> P3: Karthik -> (P1: Rahul)\n\
         {rule}\n\
         Total Patients: 4\n\
         \n\
         [Action 3] Delete 'P3: Karthik':\n\
         Deleted 'P3: Karthik'.\n\
         \n\
         --- Current Check-Up Order (Circular Cycle) ---\n\
         P1: Rahul -> P2: Meena -> P4: Aishwarya -> (P1: Rahul)\n\
         {rule}\n\
         Total Patients: 3\n",
        rule = rule
    );
    assert_eq!(String::from_utf8(console.into_inner()).unwrap(), expected);
}

#[test]
fn demo_with_no_patients_reports_every_failure() {
    let mut console = RoundsConsole::new(Vec::new());
    console.demo(Vec::new(), "P1").unwrap();
    let out = String::from_utf8(console.into_inner()).unwrap();
    assert!(out.contains("Input list is empty. Nothing created.\n"));
    assert!(out.contains("Cannot insert: List is empty.\n"));
    assert!(out.contains("Deletion failed: List is empty.\n"));
    assert_eq!(out.matches("The patient list is empty.").count(), 3);
}

#[test]
fn session_script_drives_the_rounds() {
    let script = "create P1 | P2 | P3\n\
                  insert P2 | P4\n\
                  delete P3\n\
                  delete P1\n\
                  next\n\
                  show\n";
    let mut console = RoundsConsole::new(Vec::new());
    console.run_session(script.as_bytes()).unwrap();

    let expected: CircularList<String> = names(&["P4", "P2"]).into_iter().collect();
    assert_eq!(console.patients(), &expected);

    let out = String::from_utf8(console.into_inner()).unwrap();
    assert!(out.contains("Deleted Head: 'P1'. New head is 'P2'.\n"));
    assert!(out.contains("Now seeing 'P2'.\n"));
    assert!(out.ends_with("P4 -> P2 -> (P4)\n----------------------------------------------\nTotal Patients: 2\n"));
}

#[test]
fn undo_redo_demo_transcript() {
    let mut console = HistoryConsole::new(Vec::new());
    console.demo(&names(&["A", "B", "C"])).unwrap();
    let out = String::from_utf8(console.into_inner()).unwrap();

    let headers: Vec<&str> = out.lines().filter(|line| line.starts_with("--- ")).collect();
    assert_eq!(
        headers,
        vec![
            "--- Action 'A' performed. ---",
            "--- Action 'B' performed. ---",
            "--- Action 'C' performed. ---",
            "--- Action 'C' undone. ---",
            "--- Action 'C' redone. ---",
        ]
    );
    assert!(out.starts_with("Starting Simplified Undo/Redo Demo\n"));
    assert!(out.ends_with(
        "Undo History: [\"A\", \"B\", \"C\"]\nRedo Buffer:  []\n------------------------------\n"
    ));
}
