mod question_dto;

pub use question_dto::{
    CategoryQuestionsResponseDto, CreateQuestionDto, CreateQuestionResponseDto,
    DeleteQuestionResponseDto, QuestionDto, QuestionListResponseDto, SearchQuestionsDto,
    SearchQuestionsResponseDto,
};
