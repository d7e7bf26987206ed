use serde::Serialize;

use crate::meals::repo::Meal;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: usize,
    pub total_meals_in_diet: usize,
    pub total_meals_out_diet: usize,
    pub best_meal_sequence: usize,
}

/// Single pass over the user's meals, already ordered by date descending.
/// Counts both flags and tracks the longest run of consecutive in-diet meals
/// with a streak counter that resets on every out-of-diet meal.
pub fn summarize(meals: &[Meal]) -> MealMetrics {
    let mut in_diet = 0;
    let mut best = 0;
    let mut current = 0;

    for meal in meals {
        if meal.in_diet {
            in_diet += 1;
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }

    MealMetrics {
        total_meals: meals.len(),
        total_meals_in_diet: in_diet,
        total_meals_out_diet: meals.len() - in_diet,
        best_meal_sequence: best,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};
    use uuid::Uuid;

    use super::*;

    fn meals(flags: &[bool]) -> Vec<Meal> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &in_diet)| Meal {
                id: Uuid::new_v4(),
                user_id: Uuid::nil(),
                name: format!("meal {i}"),
                description: String::new(),
                some_date: date!(2025 - 08 - 07),
                some_time: time!(12:00),
                in_diet,
            })
            .collect()
    }

    #[test]
    fn streak_broken_by_out_of_diet_meal() {
        let metrics = summarize(&meals(&[true, true, false, true]));
        assert_eq!(metrics.best_meal_sequence, 2);
        assert_eq!(metrics.total_meals, 4);
        assert_eq!(metrics.total_meals_in_diet, 3);
        assert_eq!(metrics.total_meals_out_diet, 1);
    }

    #[test]
    fn unbroken_streak_spans_all_meals() {
        assert_eq!(summarize(&meals(&[true, true, true])).best_meal_sequence, 3);
    }

    #[test]
    fn no_in_diet_meals_means_zero_streak() {
        let metrics = summarize(&meals(&[false, false]));
        assert_eq!(metrics.best_meal_sequence, 0);
        assert_eq!(metrics.total_meals_in_diet, 0);
        assert_eq!(metrics.total_meals_out_diet, 2);
    }

    #[test]
    fn empty_history_is_all_zeroes() {
        let metrics = summarize(&[]);
        assert_eq!(
            metrics,
            MealMetrics {
                total_meals: 0,
                total_meals_in_diet: 0,
                total_meals_out_diet: 0,
                best_meal_sequence: 0,
            }
        );
    }

    #[test]
    fn totals_always_add_up() {
        for flags in [
            vec![],
            vec![true],
            vec![false],
            vec![true, false, true, true, false, true],
            vec![false; 7],
            vec![true; 7],
        ] {
            let metrics = summarize(&meals(&flags));
            assert_eq!(
                metrics.total_meals,
                metrics.total_meals_in_diet + metrics.total_meals_out_diet
            );
        }
    }

    #[test]
    fn metrics_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(summarize(&meals(&[true, false]))).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("totalMeals"));
        assert!(obj.contains_key("totalMealsInDiet"));
        assert!(obj.contains_key("totalMealsOutDiet"));
        assert!(obj.contains_key("bestMealSequence"));
    }
}
