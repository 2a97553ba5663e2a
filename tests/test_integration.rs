use recipe_scaler::controllers::run_session;
use recipe_scaler::error::RecipeError;
use std::io::Cursor;

#[test]
fn test_full_session_transcript_with_reset() {
    let input = "\
2
Flour
2
cups
Sugar
0.5
cup
2
Mix
Bake
2
yes
no
";
    let mut output = Vec::new();

    let recipe = run_session(Cursor::new(input), &mut output).expect("Session failed");

    let expected = "\
Enter the number of ingredients:
Enter ingredient 1 name:
Enter ingredient 1 quantity:
Enter ingredient 1 unit:
Enter ingredient 2 name:
Enter ingredient 2 quantity:
Enter ingredient 2 unit:
Enter the number of steps:
Enter step 1:
Enter step 2:
Enter the scaling factor (0.5 for half, 2 for double, 3 for triple):
Recipe Details:
Ingredients:
- 4 cups of Flour
- 1 cup of Sugar

Steps:
1. Mix
2. Bake
Would you like to reset the quantities to original? (yes/no)
Recipe Details:
Ingredients:
- 2 cups of Flour
- 0.5 cup of Sugar

Steps:
1. Mix
2. Bake
Would you like to clear the recipe to start a new one? (yes/no)
";
    assert_eq!(String::from_utf8(output).expect("Output was not UTF-8"), expected);

    // Reset was accepted, clear was declined
    assert_eq!(recipe.ingredients()[0].quantity(), 2.0);
    assert_eq!(recipe.ingredients()[1].quantity(), 0.5);
    assert_eq!(recipe.steps().len(), 2);
}

#[test]
fn test_session_without_reset_then_clear() {
    let input = "1\nEggs\n3\nwhole\n1\nWhisk\n2\nno\nYes\n";
    let mut output = Vec::new();

    let recipe = run_session(Cursor::new(input), &mut output).expect("Session failed");
    let transcript = String::from_utf8(output).expect("Output was not UTF-8");

    // Only the scaled rendering is printed
    assert_eq!(transcript.matches("Recipe Details:").count(), 1);
    assert!(transcript.contains("- 6 whole of Eggs\n"));
    assert!(transcript.contains("\n1. Whisk\n"));
    assert!(transcript.ends_with("Would you like to clear the recipe to start a new one? (yes/no)\n"));

    assert!(recipe.is_empty());
    assert_eq!(recipe.original_quantity_count(), 0);
}

#[test]
fn test_duplicate_ingredient_names_share_first_baseline() {
    let input = "2\nSugar\n1\ncup\nSugar\n5\ncup\n0\n3\nno\nno\n";
    let mut output = Vec::new();

    let recipe = run_session(Cursor::new(input), &mut output).expect("Session failed");

    assert_eq!(recipe.original_quantity("Sugar"), Some(1.0));
    let quantities: Vec<f64> = recipe.ingredients().iter().map(|i| i.quantity()).collect();
    assert_eq!(quantities, vec![3.0, 3.0]);
}

#[test]
fn test_session_with_empty_recipe() {
    let input = "0\n0\n1.5\nyes\nno\n";
    let mut output = Vec::new();

    let recipe = run_session(Cursor::new(input), &mut output).expect("Session failed");
    let transcript = String::from_utf8(output).expect("Output was not UTF-8");

    assert!(recipe.is_empty());
    assert_eq!(
        transcript.matches("Recipe Details:\nIngredients:\n\nSteps:\n").count(),
        2
    );
}

#[test]
fn test_malformed_scaling_factor_aborts_session() {
    let input = "1\nFlour\n2\ncups\n0\ndouble\nno\nno\n";
    let mut output = Vec::new();

    let result = run_session(Cursor::new(input), &mut output);
    let transcript = String::from_utf8(output).expect("Output was not UTF-8");

    match result {
        Err(RecipeError::InvalidNumber { input, .. }) => assert_eq!(input, "double"),
        other => panic!("Expected InvalidNumber error, got {:?}", other),
    }
    // Nothing is rendered after the bad answer
    assert!(!transcript.contains("Recipe Details:"));
}
