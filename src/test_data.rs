#[cfg(test)]
pub const VALUE_BETS_CONTENT: &str = r###"## Introduction

In the ever-evolving world of sports betting, success isn't just about predicting winners — it's about identifying opportunities where the **odds are in your favor**. This concept is known as **value betting**, and it's the secret weapon used by professional bettors to maintain long-term profitability.

Whether you're wagering on the WNBA, MLB, or any other sport, understanding how to spot a **value bet** can make all the difference. Unlike casual betting, which often relies on gut feelings or hype, value betting uses logic, **expected value (EV)**, and a deep understanding of **odds vs probability** to give you a consistent edge.

In this blog, we'll break down what value betting really means, why it matters, and how you can apply it to your own betting strategy — whether you're a beginner or someone looking to refine their skills. If you've ever wondered why some bettors win more over time while others struggle to stay afloat, this is the knowledge gap that separates them.

Let's dive into the core principles that make value betting the **cornerstone of smart, data-driven betting** — and explore how you can use it to turn short-term guesses into long-term gains.

## What is a Value Bet?

### 📊 Definition Simplified

A value bet is when the odds set by a bookmaker underestimate the true probability of an event. It's like buying something on sale — you get more than what you paid for.

For instance, if a team's real chance of winning is 70% (fair odds of 1.43), but the bookmaker offers 1.90, you're getting tremendous value. Consistently finding such bets can significantly improve your long-term profits.

### 🎯 Why Do Value Bets Exist?

- **Market Inefficiencies:** Bookmakers can't always price perfectly.
- **Public Bias:** Odds shift based on betting volume, not logic.
- **Human Error:** Odds compilers may overlook injuries, news, or form.

🧠 **Example:** If Manchester United has a 65% win probability but the bookmaker offers odds of 2.00 (implying 50%), you're getting an edge.

#### 💡 Pro Insight

You don't have to win every bet. The goal is to consistently make decisions where the odds are in your favor. Over hundreds of bets, this strategy leads to a profitable edge.

##### ⚖️ Fair Odds vs. Offered Odds

Fair odds reflect real probability. If your estimated win rate is 60%, fair odds = 1.67. If you get 2.10, that's value.

##### 📈 Long-Term Strategy

Betting is not about luck, it's about playing the numbers smart. The more value bets you place, the more your bankroll grows.

## Understanding Expected Value (EV)

Expected Value (EV) is a mathematical concept used to calculate the average outcome of a bet if repeated many times. It's the true north for value bettors — helping them determine whether a bet is profitable in the long run.

**EV Formula**

EV = (Win% × WinAmount) - (Loss% × LossAmount)

#### 🎯 Scenario Example

You bet $100 on a game with a 60% chance of winning at odds of 2.0.

EV = (0.60 × 100) - (0.40 × 100) = +20

This means you're expected to profit $20 per bet over time.

🔍 **Insight**

- EV reflects long-term profitability.
- Helps ignore short-term variance.
- Essential for serious bettors.

📈 **Positive EV**

Good bets. Expect to profit over time.

📉 **Negative EV**

Bad bets. Expect to lose in the long run.

Remember: Smart betting isn't luck — it's about knowing your edge.

## How to Calculate a Value Bet

Identifying a **value bet** means spotting when the bookmaker's odds underestimate the true chance of an outcome. To do this accurately, you need to calculate the _implied probability_ from the odds and compare it with your estimated probability.

### Step-by-Step Calculation

1. **Convert odds to implied probability:**
   `Implied Probability = 1 / Decimal Odds`
2. **Estimate your true probability:** based on research, stats, or expert insight.
3. **Compare the two:** if your estimated probability is higher than the implied probability, you've found a value bet!

**Example:** Suppose a bookmaker offers odds of 3.0 for a team to win. The implied probability is 1/3.0 = 33.33%.

If your analysis shows the team has a 40% chance to win, this is a value bet because your estimated probability exceeds the implied probability.

Remember, consistently betting on value bets is the key to long-term success, not chasing risky favorites or gut feelings.

## How to Identify and Find Value Bets

Spotting value bets is a skill every successful bettor needs. It involves more than just picking favorites — it's about finding opportunities where the bookmaker's odds underestimate the real chance of an outcome.

- **Analyze the odds carefully:** Compare bookmaker odds with your own probability estimates. If the odds are higher than your calculated chance, you've found potential value. This margin is where profitability lies.
- **Use statistical models and data analysis:** Incorporate player form, team dynamics, injury updates, and historical data. Advanced bettors rely on algorithms and predictive models to calculate precise probabilities.
- **Understand market movements:** Watch how odds shift in the market. Significant changes can indicate insider knowledge or betting patterns worth investigating.
- **Stay disciplined and avoid emotional bets:** Emotions can cloud judgment. Always bet based on data and clear expected value rather than gut feelings or popular opinion.
- **Shop for the best odds:** Odds vary across bookmakers. By using multiple betting platforms, you can maximize returns by placing bets where odds offer the highest value.
- **Maintain thorough records:** Track all bets, outcomes, and the reasoning behind each bet. Reviewing your data helps refine your strategy and identify strengths and weaknesses.
- **Leverage technology:** Use odds comparison websites, betting calculators, and automated alerts to spot and capitalize on value bets quickly.

Mastering value betting requires patience, detailed analysis, and a disciplined approach. By consistently identifying value, you increase your chances of long-term betting success.

## Conclusion: Embrace Value Betting for Sustainable Profit

Understanding and applying value betting is essential for anyone serious about turning sports betting into a profitable venture. It shifts your focus from merely chasing wins to making informed bets that offer positive expected value. This strategic mindset is what separates consistent winners from casual bettors.

By analyzing odds and comparing them with your own calculated probabilities, you can identify bets that are undervalued by bookmakers. Betting on these "value bets" increases your chances of long-term profitability, even if you lose some short-term wagers.

> "Patience and discipline in value betting can transform your betting experience, turning luck into skill."

Keep in mind, successful value betting requires:

- Continuous research and data analysis to refine your probability models.
- Keeping emotions in check and avoiding impulsive bets driven by personal bias.
- Maintaining proper bankroll management to weather inevitable downswings.
- Tracking your bets meticulously to understand your performance and improve over time.

The sports betting landscape is always evolving, and bookmakers adjust odds constantly. Staying informed and adapting your strategies is key to staying ahead of the curve.
"###;

#[cfg(test)]
pub const POST_LIST_JSON: &str = r###"{
  "posts": [
    {
      "id": 1,
      "slug": "understanding-value-bets",
      "title": "Understanding Value Bets: The Key to Long-Term Betting Success",
      "excerpt": "Why the odds matter more than the winner.",
      "content": "## Introduction\n\nValue betting is about **odds**.",
      "category": "Strategy",
      "tags": ["value betting", "ev"],
      "author": "Jordan",
      "published_at": "2025-05-27T10:00:00Z"
    },
    {
      "id": "b-2",
      "slug": "bankroll-basics",
      "title": "Bankroll Basics",
      "content": "Keep it simple.",
      "published_at": "2025-06-02 08:30:00"
    }
  ]
}"###;
